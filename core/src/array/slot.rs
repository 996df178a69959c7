use crate::value::Value;

/// The state of one index. `Absent` is a hole; an explicitly stored
/// `Value::Undefined` is `Present` and shows up in presence tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Slot {
    #[default]
    Absent,
    Present(Value),
}

impl Slot {
    pub fn is_absent(&self) -> bool {
        matches!(self, Slot::Absent)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Slot::Present(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Slot::Absent => None,
            Slot::Present(value) => Some(value),
        }
    }

    /// Read the slot the way a member access does: a hole reads as `undefined`.
    pub fn into_value(self) -> Value {
        match self {
            Slot::Absent => Value::Undefined,
            Slot::Present(value) => value,
        }
    }

    pub fn into_option(self) -> Option<Value> {
        match self {
            Slot::Absent => None,
            Slot::Present(value) => Some(value),
        }
    }
}

impl From<Option<Value>> for Slot {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(value) => Slot::Present(value),
            None => Slot::Absent,
        }
    }
}

impl From<Value> for Slot {
    fn from(value: Value) -> Self {
        Slot::Present(value)
    }
}
