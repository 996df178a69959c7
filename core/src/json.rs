//! JSON conversion. Arrays serialize through an index scan, so every hole
//! is emitted as `null` in its position rather than dropped.

use std::collections::HashSet;

use serde_json::Value as JsonValue;

use crate::array::JsArray;
use crate::errors::ArrayError;
use crate::value::Value;

impl JsArray {
    pub fn to_json(&self) -> Result<JsonValue, ArrayError> {
        array_to_json(self, &mut HashSet::new())
    }

    /// Build an array from a JSON array. `null` entries become `Value::Null`,
    /// not holes.
    pub fn from_json(json: &JsonValue) -> Result<JsArray, ArrayError> {
        match json {
            JsonValue::Array(items) => {
                let values = items
                    .iter()
                    .map(value_from_json)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(JsArray::from_values(values))
            }
            other => Err(ArrayError::type_error(format!(
                "expected a JSON array, got {}",
                json_kind(other)
            ))),
        }
    }
}

pub fn value_to_json(value: &Value) -> Result<JsonValue, ArrayError> {
    to_json_value(value, &mut HashSet::new())
}

pub fn value_from_json(json: &JsonValue) -> Result<Value, ArrayError> {
    Ok(match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Boolean(*b),
        JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Array(_) => Value::from(JsArray::from_json(json)?),
        JsonValue::Object(_) => {
            return Err(ArrayError::type_error(
                "JSON objects cannot be stored as array elements",
            ));
        }
    })
}

fn to_json_value(value: &Value, seen: &mut HashSet<usize>) -> Result<JsonValue, ArrayError> {
    Ok(match value {
        Value::Undefined | Value::Null => JsonValue::Null,
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::Number(n) => number_to_json(*n),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Array(arr) => {
            let inner = arr.try_borrow().map_err(|_| circular())?;
            array_to_json(&inner, seen)?
        }
    })
}

/// Integral numbers in the safe range are written without a fraction.
/// NaN and the infinities have no JSON form and become `null`.
fn number_to_json(n: f64) -> JsonValue {
    const MAX_SAFE: f64 = 9_007_199_254_740_992.0;
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE {
        return JsonValue::from(n as i64);
    }
    serde_json::Number::from_f64(n)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}

fn array_to_json(arr: &JsArray, seen: &mut HashSet<usize>) -> Result<JsonValue, ArrayError> {
    let addr = arr as *const JsArray as usize;
    if !seen.insert(addr) {
        return Err(circular());
    }
    let out = arr
        .index_scan()
        .map(|slot| match slot {
            None => Ok(JsonValue::Null),
            Some(value) => to_json_value(value, seen),
        })
        .collect::<Result<Vec<_>, _>>()?;
    seen.remove(&addr);
    Ok(JsonValue::Array(out))
}

fn circular() -> ArrayError {
    ArrayError::type_error("Converting circular structure to JSON")
}

fn json_kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
