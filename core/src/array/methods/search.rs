use super::relative_index;
use crate::array::{JsArray, Slot};
use crate::value::{same_value_zero, Value};

impl JsArray {
    /// First index at or after `from` holding a value strictly equal to
    /// `target`. Holes never match.
    pub fn index_of(&self, target: &Value, from: i64) -> Option<u32> {
        let start = relative_index(from, self.length);
        self.value_scan_range(start, self.length)
            .find(|(_, value)| *value == target)
            .map(|(index, _)| index)
    }

    /// Last index at or before `from` (default: the last index) holding a
    /// value strictly equal to `target`.
    pub fn last_index_of(&self, target: &Value, from: Option<i64>) -> Option<u32> {
        if self.length == 0 {
            return None;
        }
        let last = i64::from(self.length) - 1;
        let from = match from {
            None => last,
            Some(from) if from >= 0 => from.min(last),
            Some(from) => last + 1 + from,
        };
        if from < 0 {
            return None;
        }
        self.value_scan_range(0, from as u32 + 1)
            .rev()
            .find(|(_, value)| *value == target)
            .map(|(index, _)| index)
    }

    /// SameValueZero search from `from`. Holes read as `undefined`, so an
    /// `undefined` target matches any hole in range.
    pub fn includes(&self, target: &Value, from: i64) -> bool {
        let start = relative_index(from, self.length);
        let mut present = 0u64;
        for (_, value) in self.value_scan_range(start, self.length) {
            if same_value_zero(value, target) {
                return true;
            }
            present += 1;
        }
        target.is_undefined() && present < u64::from(self.length - start)
    }

    /// First index whose reading satisfies `predicate`, visiting holes as
    /// `undefined`.
    pub fn find_index<P>(&self, mut predicate: P) -> Option<u32>
    where
        P: FnMut(&Value, u32) -> bool,
    {
        let undefined = Value::Undefined;
        self.index_scan()
            .zip(0..)
            .find(|(slot, index)| predicate(slot.unwrap_or(&undefined), *index))
            .map(|(_, index)| index)
    }

    pub fn find<P>(&self, predicate: P) -> Option<Value>
    where
        P: FnMut(&Value, u32) -> bool,
    {
        self.find_index(predicate)
            .map(|index| self.get_index(index).into_value())
    }

    /// Relative read: negative positions count back from the end.
    pub fn at(&self, position: i64) -> Slot {
        let len = i64::from(self.length);
        let index = if position < 0 { len.saturating_add(position) } else { position };
        if !(0..len).contains(&index) {
            return Slot::Absent;
        }
        self.get_index(index as u32)
    }
}
