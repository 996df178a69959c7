use crate::array::iter::ArrayCursor;
use crate::array::JsArray;
use crate::errors::ArrayError;
use crate::value::{to_integer_or_infinity, ArrayRef, Value};

/// Call an array method by its script name. Returns `Ok(None)` for names
/// that are not array methods.
pub fn call_array_method(
    arr: &ArrayRef,
    method: &str,
    args: &[Value],
) -> Result<Option<Value>, ArrayError> {
    let result = match method {
        "push" => {
            let len = arr.borrow_mut().push(args.iter().cloned())?;
            Value::from(len)
        }
        "pop" => arr.borrow_mut().pop().into_value(),
        "shift" => arr.borrow_mut().shift().into_value(),
        "unshift" => {
            let len = arr.borrow_mut().unshift(args.iter().cloned())?;
            Value::from(len)
        }
        "splice" => {
            let start = integer_arg(args.first(), 0);
            let delete_count = match args.len() {
                0 => Some(0),
                1 => None,
                _ => Some(integer_arg(args.get(1), 0)),
            };
            let items = args.iter().skip(2).cloned();
            let removed = arr.borrow_mut().splice(start, delete_count, items)?;
            Value::from(removed)
        }
        "fill" => {
            let value = args.first().cloned().unwrap_or_default();
            let start = integer_arg(args.get(1), 0);
            let end = optional_integer_arg(args.get(2));
            arr.borrow_mut().fill(&value, start, end);
            Value::Array(arr.clone())
        }
        "copyWithin" => {
            let target = integer_arg(args.first(), 0);
            let start = integer_arg(args.get(1), 0);
            let end = optional_integer_arg(args.get(2));
            arr.borrow_mut().copy_within(target, start, end);
            Value::Array(arr.clone())
        }
        "concat" => {
            let joined = arr.borrow().concat(args)?;
            Value::from(joined)
        }
        "reverse" => {
            arr.borrow_mut().reverse();
            Value::Array(arr.clone())
        }
        "sort" => {
            if let Some(comparator) = args.first().filter(|v| !v.is_undefined()) {
                return Err(ArrayError::type_error(format!(
                    "the comparison function must be either a function or undefined, got {}",
                    comparator.type_name()
                )));
            }
            arr.borrow_mut().sort();
            Value::Array(arr.clone())
        }
        "indexOf" => {
            let target = args.first().cloned().unwrap_or_default();
            let from = integer_arg(args.get(1), 0);
            index_result(arr.borrow().index_of(&target, from))
        }
        "lastIndexOf" => {
            let target = args.first().cloned().unwrap_or_default();
            let from = args.get(1).map(|v| integer_arg(Some(v), 0));
            index_result(arr.borrow().last_index_of(&target, from))
        }
        "includes" => {
            let target = args.first().cloned().unwrap_or_default();
            let from = integer_arg(args.get(1), 0);
            Value::Boolean(arr.borrow().includes(&target, from))
        }
        "slice" => {
            let start = integer_arg(args.first(), 0);
            let end = optional_integer_arg(args.get(1));
            Value::from(arr.borrow().slice(start, end))
        }
        "join" => {
            let sep = match args.first() {
                None | Some(Value::Undefined) => ",".to_string(),
                Some(v) => v.to_js_string(),
            };
            Value::String(arr.borrow().join(&sep))
        }
        "toString" => Value::String(arr.borrow().join(",")),
        "at" => {
            let position = integer_arg(args.first(), 0);
            arr.borrow().at(position).into_value()
        }
        "keys" | "values" | "entries" => {
            let cursor = match method {
                "keys" => ArrayCursor::keys(arr.clone()),
                "entries" => ArrayCursor::entries(arr.clone()),
                _ => ArrayCursor::values(arr.clone()),
            };
            Value::from(JsArray::from_values(cursor))
        }
        _ => return Ok(None),
    };
    Ok(Some(result))
}

/// Names accepted by [`call_array_method`].
pub const ARRAY_METHODS: &[&str] = &[
    "at",
    "concat",
    "copyWithin",
    "entries",
    "fill",
    "includes",
    "indexOf",
    "join",
    "keys",
    "lastIndexOf",
    "pop",
    "push",
    "reverse",
    "shift",
    "slice",
    "sort",
    "splice",
    "toString",
    "unshift",
    "values",
];

fn integer_arg(arg: Option<&Value>, default: i64) -> i64 {
    match arg {
        None | Some(Value::Undefined) => default,
        // `as` saturates, so infinities land on the i64 bounds.
        Some(v) => to_integer_or_infinity(v.to_number()) as i64,
    }
}

fn optional_integer_arg(arg: Option<&Value>) -> Option<i64> {
    match arg {
        None | Some(Value::Undefined) => None,
        Some(v) => Some(integer_arg(Some(v), 0)),
    }
}

fn index_result(index: Option<u32>) -> Value {
    Value::Number(index.map_or(-1.0, f64::from))
}
