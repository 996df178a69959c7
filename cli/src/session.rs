use std::collections::BTreeMap;
use std::fmt::Write as _;

use holey::array::dispatch::call_array_method;
use holey::json::value_to_json;
use holey::{ArrayError, ArrayRef, JsArray, PropertyKey, Slot, StoragePolicy, Value};
use serde_json::Value as JsonValue;

use crate::error::CliError;
use crate::script::ast::{Command, Expr, Statement, Target};

/// Named arrays plus the storage policy new arrays are created with.
pub struct Session {
    arrays: BTreeMap<String, ArrayRef>,
    policy: StoragePolicy,
}

/// What a command produced, before rendering.
#[derive(Debug)]
pub enum Outcome {
    Value(Value),
    Slot(Slot),
    Array(ArrayRef),
    Entries(Vec<(u32, Value)>),
    Keys(Vec<PropertyKey>),
    Json(JsonValue),
}

impl Session {
    pub fn new(policy: StoragePolicy) -> Self {
        Self {
            arrays: BTreeMap::new(),
            policy,
        }
    }

    pub fn reset(&mut self) {
        self.arrays.clear();
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.arrays.keys().map(String::as_str)
    }

    pub fn lookup(&self, target: &Target) -> Result<&ArrayRef, CliError> {
        self.arrays
            .get(&target.name)
            .ok_or_else(|| CliError::UnknownArray {
                name: target.name.clone(),
                span: target.span.into(),
            })
    }

    /// Parse and run every command in `source`, handing each outcome to
    /// `emit`. Stops at the first error.
    pub fn run_source(
        &mut self,
        source: &str,
        mut emit: impl FnMut(Outcome) -> Result<(), CliError>,
    ) -> Result<(), CliError> {
        let statements = crate::script::parse(source)?;
        tracing::debug!(count = statements.len(), "parsed script");
        for statement in &statements {
            let outcome = self.execute(statement)?;
            emit(outcome)?;
        }
        Ok(())
    }

    pub fn execute(&mut self, statement: &Statement) -> Result<Outcome, CliError> {
        tracing::trace!(command = ?statement.command, "execute");
        let outcome = match &statement.command {
            Command::Let { name, value } => {
                let value = self.evaluate(value)?;
                let Value::Array(arr) = &value else {
                    return Err(ArrayError::type_error(format!(
                        "only arrays can be bound with let, got {}",
                        value.type_name()
                    ))
                    .into());
                };
                tracing::debug!(name = %name, length = arr.borrow().len(), "bound array");
                self.arrays.insert(name.clone(), arr.clone());
                Outcome::Value(value)
            }
            Command::Call {
                target,
                method,
                args,
            } => {
                let args = args
                    .iter()
                    .map(|arg| self.evaluate(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                let arr = self.lookup(target)?;
                match call_array_method(arr, method, &args)? {
                    Some(result) => Outcome::Value(result),
                    None => {
                        return Err(CliError::UnknownMethod {
                            target: target.name.clone(),
                            method: method.clone(),
                        });
                    }
                }
            }
            Command::Read { target, key } => {
                let key = self.evaluate_key(key)?;
                Outcome::Slot(self.lookup(target)?.borrow().get(key))
            }
            Command::Write { target, key, value } => {
                let key = self.evaluate_key(key)?;
                let value = self.evaluate(value)?;
                self.lookup(target)?.borrow_mut().set(key, value.clone())?;
                Outcome::Value(value)
            }
            Command::Delete { target, key } => {
                let key = self.evaluate_key(key)?;
                Outcome::Value(Value::Boolean(self.lookup(target)?.borrow_mut().delete(key)))
            }
            Command::Has { key, target } => {
                let key = self.evaluate_key(key)?;
                Outcome::Value(Value::Boolean(self.lookup(target)?.borrow().has(key)))
            }
            Command::Show(target) => Outcome::Array(self.lookup(target)?.clone()),
            Command::Values(target) => {
                let arr = self.lookup(target)?.borrow();
                Outcome::Entries(arr.value_scan().map(|(i, v)| (i, v.clone())).collect())
            }
            Command::Keys(target) => Outcome::Keys(self.lookup(target)?.borrow().own_keys()),
            Command::Json(target) => Outcome::Json(self.lookup(target)?.borrow().to_json()?),
        };
        Ok(outcome)
    }

    fn evaluate_key(&self, expr: &Expr) -> Result<PropertyKey, CliError> {
        Ok(PropertyKey::from_value(&self.evaluate(expr)?))
    }

    fn evaluate(&self, expr: &Expr) -> Result<Value, CliError> {
        Ok(match expr {
            Expr::Undefined => Value::Undefined,
            Expr::Null => Value::Null,
            Expr::Bool(b) => Value::Boolean(*b),
            Expr::Number(n) => Value::Number(*n),
            Expr::String(s) => Value::String(s.clone()),
            Expr::Ref(target) => Value::Array(self.lookup(target)?.clone()),
            Expr::Array(items) => {
                let length = u32::try_from(items.len()).map_err(|_| ArrayError::InvalidLength {
                    value: items.len() as f64,
                })?;
                let mut arr = JsArray::with_policy(self.policy);
                arr.set_length(length);
                for (index, item) in (0..length).zip(items) {
                    if let Some(item) = item {
                        arr.set_index(index, self.evaluate(item)?);
                    }
                }
                Value::from(arr)
            }
        })
    }
}

impl Outcome {
    /// Text for the terminal, or JSON when `json` is set.
    pub fn render(&self, json: bool) -> Result<String, CliError> {
        if json {
            return Ok(self.to_json()?.to_string());
        }
        Ok(match self {
            Outcome::Value(value) => value.to_string(),
            Outcome::Slot(Slot::Present(value)) => value.to_string(),
            Outcome::Slot(Slot::Absent) => "<empty>".to_string(),
            Outcome::Array(arr) => arr.borrow().to_string(),
            Outcome::Entries(entries) => {
                let mut out = String::new();
                for (index, value) in entries {
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    let _ = write!(out, "{index}: {value}");
                }
                out
            }
            Outcome::Keys(keys) => keys
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            Outcome::Json(json) => json.to_string(),
        })
    }

    fn to_json(&self) -> Result<JsonValue, CliError> {
        Ok(match self {
            Outcome::Value(value) | Outcome::Slot(Slot::Present(value)) => value_to_json(value)?,
            Outcome::Slot(Slot::Absent) => JsonValue::Null,
            Outcome::Array(arr) => arr.borrow().to_json()?,
            Outcome::Entries(entries) => JsonValue::Array(
                entries
                    .iter()
                    .map(|(index, value)| {
                        Ok(JsonValue::Array(vec![
                            JsonValue::from(*index),
                            value_to_json(value)?,
                        ]))
                    })
                    .collect::<Result<Vec<_>, ArrayError>>()?,
            ),
            Outcome::Keys(keys) => JsonValue::Array(
                keys.iter()
                    .map(|key| JsonValue::String(key.to_string()))
                    .collect(),
            ),
            Outcome::Json(json) => json.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, source: &str) -> Vec<String> {
        let mut out = Vec::new();
        session
            .run_source(source, |outcome| {
                out.push(outcome.render(false)?);
                Ok(())
            })
            .unwrap();
        out
    }

    #[test]
    fn holes_are_reported_as_empty() {
        let mut session = Session::new(StoragePolicy::default());
        let out = run(&mut session, "let a = [1, , undefined]\na[1]\na[2]\n1 in a\n2 in a");
        assert_eq!(out[1..], ["<empty>", "undefined", "false", "true"]);
    }

    #[test]
    fn methods_and_reports() {
        let mut session = Session::new(StoragePolicy::default());
        let out = run(
            &mut session,
            "let a = [3, 1, 2]; a.sort(); a.push(10); a; values a; a.x = 1; keys a",
        );
        assert_eq!(out[1], "[1, 2, 3]");
        assert_eq!(out[2], "4");
        assert_eq!(out[3], "[1, 2, 3, 10]");
        assert_eq!(out[4], "0: 1\n1: 2\n2: 3\n3: 10");
        assert_eq!(out[6], "0, 1, 2, 3, length, x");
    }

    #[test]
    fn length_writes_truncate() {
        let mut session = Session::new(StoragePolicy::default());
        let out = run(&mut session, "let a = [1, 2, 3, 4]\na.length = 2\nshow a\njson a");
        assert_eq!(out[2], "[1, 2]");
        assert_eq!(out[3], "[1,2]");
    }

    #[test]
    fn let_shares_the_handle() {
        let mut session = Session::new(StoragePolicy::default());
        let out = run(&mut session, "let a = [1]\nlet b = a\nb.push(2)\na");
        assert_eq!(out[3], "[1, 2]");
        assert_eq!(session.names().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn json_rendering() {
        let mut session = Session::new(StoragePolicy::default());
        let statements = crate::script::parse("let a = [, 'x']\na[0]\nvalues a").unwrap();
        session.execute(&statements[0]).unwrap();
        let hole = session.execute(&statements[1]).unwrap();
        assert_eq!(hole.render(true).unwrap(), "null");
        let values = session.execute(&statements[2]).unwrap();
        assert_eq!(values.render(true).unwrap(), "[[1,\"x\"]]");
    }

    #[test]
    fn errors() {
        let mut session = Session::new(StoragePolicy::default());
        let ignore = |_| Ok(());
        assert!(matches!(
            session.run_source("b.push(1)", ignore),
            Err(CliError::UnknownArray { .. })
        ));
        assert!(matches!(
            session.run_source("let a = []\na.flat()", ignore),
            Err(CliError::UnknownMethod { .. })
        ));
        assert!(matches!(
            session.run_source("a.length = -1", ignore),
            Err(CliError::Array(ArrayError::InvalidLength { .. }))
        ));
        assert!(matches!(
            session.run_source("let n = 1", ignore),
            Err(CliError::Array(ArrayError::TypeError { .. }))
        ));
    }
}
