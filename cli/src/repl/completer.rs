use holey::array::dispatch::ARRAY_METHODS;
use rustyline::completion::Pair;

use crate::script::is_ident_continue;

const REPL_COMMANDS: &[&str] = &[".clear", ".exit", ".help", ".load ", ".policy"];

const KEYWORDS: &[&str] = &[
    "let",
    "delete",
    "in",
    "show",
    "values",
    "keys",
    "json",
    "true",
    "false",
    "null",
    "undefined",
    "NaN",
    "Infinity",
];

pub fn complete_line(line: &str, pos: usize, names: &[String]) -> (usize, Vec<Pair>) {
    let safe_pos = pos.min(line.len());
    let prefix = line.get(..safe_pos).unwrap_or(line);

    if prefix.trim_start().starts_with('.') && !prefix.trim_start().contains(' ') {
        let start = prefix.len() - prefix.trim_start().len();
        let needle = &prefix[start..];
        let words = REPL_COMMANDS
            .iter()
            .copied()
            .filter(|cmd| cmd.starts_with(needle))
            .collect::<Vec<_>>();
        return (start, pairs(&words));
    }

    if let Some((start, members)) = member_completion(prefix) {
        return (start, pairs(&members));
    }

    let start = word_start(prefix);
    let needle = &prefix[start..];
    let words = KEYWORDS
        .iter()
        .copied()
        .chain(names.iter().map(String::as_str))
        .filter(|word| word.starts_with(needle))
        .collect::<Vec<_>>();

    (start, pairs(&words))
}

/// Methods after `name.`. The array name itself is not checked: any bound
/// name is an array.
fn member_completion(prefix: &str) -> Option<(usize, Vec<&'static str>)> {
    let dot = prefix.rfind('.')?;
    let member_prefix = &prefix[dot + 1..];
    if !member_prefix.bytes().all(is_ident_continue) {
        return None;
    }
    let object_part = &prefix[..dot];
    if word_start(object_part) == object_part.len() {
        return None;
    }

    let members = ARRAY_METHODS
        .iter()
        .copied()
        .chain(["length"])
        .filter(|name| name.starts_with(member_prefix))
        .collect::<Vec<_>>();

    Some((dot + 1, members))
}

fn pairs(values: &[&str]) -> Vec<Pair> {
    values
        .iter()
        .map(|v| Pair {
            display: (*v).to_string(),
            replacement: (*v).to_string(),
        })
        .collect()
}

fn word_start(prefix: &str) -> usize {
    prefix
        .char_indices()
        .rev()
        .find(|(_, ch)| !ch.is_ascii() || !is_ident_continue(*ch as u8))
        .map_or(0, |(idx, ch)| idx + ch.len_utf8())
}
