//! Property key classification.
//!
//! Every key reaching an array is classified once at the boundary into an
//! index key, which takes part in `length` accounting, or a name, which is a
//! plain associative property. Internal code only ever sees [`PropertyKey`].

use std::fmt;

use crate::array::MAX_INDEX;
use crate::value::{number_to_string, Value};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Index(u32),
    Name(String),
}

impl PropertyKey {
    /// Classify a string key. `"0"` through `"4294967294"` in canonical form
    /// are indices; everything else, including `"01"`, `"-1"`, `"1.0"` and
    /// `"4294967295"`, is a name.
    pub fn classify(key: &str) -> Self {
        match parse_index(key) {
            Some(index) => PropertyKey::Index(index),
            None => PropertyKey::Name(key.to_string()),
        }
    }

    /// Classify a value the way a computed member access would: numbers go
    /// through number-to-string first, anything else through string coercion.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => PropertyKey::from(*n),
            Value::String(s) => PropertyKey::classify(s),
            other => PropertyKey::from(other.to_js_string()),
        }
    }

    pub fn as_index(&self) -> Option<u32> {
        match self {
            PropertyKey::Index(index) => Some(*index),
            PropertyKey::Name(_) => None,
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, PropertyKey::Index(_))
    }
}

/// Parse the canonical decimal form of an array index.
pub fn parse_index(key: &str) -> Option<u32> {
    let bytes = key.as_bytes();
    match bytes {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        _ if bytes.len() > 10 => None,
        _ if !bytes.iter().all(u8::is_ascii_digit) => None,
        _ => {
            let n: u64 = key.parse().ok()?;
            if n <= u64::from(MAX_INDEX) {
                Some(n as u32)
            } else {
                None
            }
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Index(index) => write!(f, "{index}"),
            PropertyKey::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(key: &str) -> Self {
        PropertyKey::classify(key)
    }
}

impl From<String> for PropertyKey {
    fn from(key: String) -> Self {
        match parse_index(&key) {
            Some(index) => PropertyKey::Index(index),
            None => PropertyKey::Name(key),
        }
    }
}

impl From<u32> for PropertyKey {
    fn from(key: u32) -> Self {
        if key <= MAX_INDEX {
            PropertyKey::Index(key)
        } else {
            PropertyKey::Name(key.to_string())
        }
    }
}

impl From<usize> for PropertyKey {
    fn from(key: usize) -> Self {
        match u32::try_from(key) {
            Ok(key) => PropertyKey::from(key),
            Err(_) => PropertyKey::Name(key.to_string()),
        }
    }
}

impl From<i64> for PropertyKey {
    fn from(key: i64) -> Self {
        match u32::try_from(key) {
            Ok(key) => PropertyKey::from(key),
            Err(_) => PropertyKey::Name(key.to_string()),
        }
    }
}

impl From<i32> for PropertyKey {
    fn from(key: i32) -> Self {
        PropertyKey::from(i64::from(key))
    }
}

impl From<f64> for PropertyKey {
    fn from(key: f64) -> Self {
        PropertyKey::from(number_to_string(key))
    }
}
