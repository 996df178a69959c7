/// Argument hint shown after `name.method(`.
pub fn hint_for(line: &str, pos: usize) -> Option<String> {
    if pos < line.len() {
        return None;
    }

    let trimmed = line.trim_end();
    let call = trimmed.strip_suffix('(')?;
    let dot = call.rfind('.')?;
    let signature = signature(&call[dot + 1..])?;
    Some(format!("{signature})"))
}

fn signature(method: &str) -> Option<&'static str> {
    Some(match method {
        "push" | "unshift" => "...items",
        "pop" | "shift" | "reverse" | "sort" | "toString" | "keys" | "values" | "entries" => "",
        "splice" => "start, deleteCount, ...items",
        "fill" => "value, start, end",
        "copyWithin" => "target, start, end",
        "concat" => "...arraysOrValues",
        "indexOf" | "lastIndexOf" | "includes" => "value, fromIndex",
        "slice" => "start, end",
        "join" => "separator",
        "at" => "index",
        _ => return None,
    })
}
