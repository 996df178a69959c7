use std::borrow::Cow;

use owo_colors::OwoColorize;

use crate::script::{is_ident_continue, is_ident_start};

const KEYWORDS: [&str; 7] = ["let", "delete", "in", "show", "values", "keys", "json"];
const LITERALS: [&str; 6] = ["true", "false", "null", "undefined", "NaN", "Infinity"];

/// Colour words, numbers, strings and comments. Works on raw bytes, so a
/// half-typed line never fails to highlight.
pub fn highlight_line(line: &str) -> Cow<'_, str> {
    let bytes = line.as_bytes();
    let mut out = String::with_capacity(line.len() * 2);
    let mut i = 0;
    let mut after_dot = false;

    while i < bytes.len() {
        let start = i;
        let b = bytes[i];
        if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
            out.push_str(&(&line[start..]).bright_black().to_string());
            break;
        }
        if b == b'"' || b == b'\'' {
            i += 1;
            while i < bytes.len() && bytes[i] != b {
                i += if bytes[i] == b'\\' { 2 } else { 1 };
            }
            i = (i + 1).min(bytes.len());
            out.push_str(&(&line[start..i]).green().to_string());
            after_dot = false;
            continue;
        }
        if b.is_ascii_digit() {
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'.') {
                i += 1;
            }
            out.push_str(&(&line[start..i]).yellow().to_string());
            after_dot = false;
            continue;
        }
        if is_ident_start(b) {
            while i < bytes.len() && is_ident_continue(bytes[i]) {
                i += 1;
            }
            let word = &line[start..i];
            if after_dot {
                out.push_str(&word.cyan().to_string());
            } else if KEYWORDS.contains(&word) {
                out.push_str(&word.blue().bold().to_string());
            } else if LITERALS.contains(&word) {
                out.push_str(&word.yellow().to_string());
            } else {
                out.push_str(word);
            }
            after_dot = false;
            continue;
        }

        // Copy one whole character.
        let len = line[start..].chars().next().map_or(1, char::len_utf8);
        i += len;
        out.push_str(&line[start..i]);
        after_dot = b == b'.';
    }

    Cow::Owned(out)
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt == "> " {
        return Cow::Owned(format!("{} ", ">".bright_green().bold()));
    }
    if prompt == "... " {
        return Cow::Owned(format!("{} ", "...".yellow().bold()));
    }
    Cow::Borrowed(prompt)
}

pub fn highlight_hint(hint: &str) -> Cow<'_, str> {
    Cow::Owned(hint.bright_black().to_string())
}
