use super::{number_to_string, Value};
use crate::array::JsArray;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self, f, &mut Vec::new())
    }
}

impl fmt::Display for JsArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_array(self, f, &mut Vec::new())
    }
}

fn write_value(value: &Value, f: &mut fmt::Formatter<'_>, seen: &mut Vec<usize>) -> fmt::Result {
    match value {
        Value::Undefined => write!(f, "undefined"),
        Value::Null => write!(f, "null"),
        Value::Boolean(b) => write!(f, "{b}"),
        Value::Number(n) => write!(f, "{}", number_to_string(*n)),
        Value::String(s) => write!(f, "{s}"),
        Value::Array(arr) => match arr.try_borrow() {
            Ok(inner) => write_array(&inner, f, seen),
            Err(_) => write!(f, "[Circular]"),
        },
    }
}

/// Runs of holes collapse into a single `<n empty items>` marker.
fn write_array(arr: &JsArray, f: &mut fmt::Formatter<'_>, seen: &mut Vec<usize>) -> fmt::Result {
    let addr = arr as *const JsArray as usize;
    if seen.contains(&addr) {
        return write!(f, "[Circular]");
    }
    seen.push(addr);

    write!(f, "[")?;
    let mut first = true;
    let mut next = 0u32;
    for (index, value) in arr.value_scan() {
        if index > next {
            separator(f, &mut first)?;
            write_holes(f, index - next)?;
        }
        separator(f, &mut first)?;
        write_value(value, f, seen)?;
        next = index + 1;
    }
    if arr.len() > next {
        separator(f, &mut first)?;
        write_holes(f, arr.len() - next)?;
    }
    write!(f, "]")?;

    seen.pop();
    Ok(())
}

fn separator(f: &mut fmt::Formatter<'_>, first: &mut bool) -> fmt::Result {
    if *first {
        *first = false;
        Ok(())
    } else {
        write!(f, ", ")
    }
}

fn write_holes(f: &mut fmt::Formatter<'_>, count: u32) -> fmt::Result {
    if count == 1 {
        write!(f, "<1 empty item>")
    } else {
        write!(f, "<{count} empty items>")
    }
}
