use crate::array::length::grown_length;
use crate::array::storage::ElementStore;
use crate::array::{JsArray, Slot};
use crate::errors::ArrayError;
use crate::value::Value;

impl JsArray {
    /// Append each value at the current end; returns the new length. Fails
    /// without writing anything if the length would pass `2^32 - 1`.
    pub fn push(&mut self, values: impl IntoIterator<Item = Value>) -> Result<u32, ArrayError> {
        let values: Vec<Value> = values.into_iter().collect();
        let base = self.length;
        let new_len = grown_length(base, values.len())?;
        for (offset, value) in values.into_iter().enumerate() {
            self.elements.set(base + offset as u32, value);
        }
        self.length = new_len;
        Ok(new_len)
    }

    pub fn push_one(&mut self, value: Value) -> Result<u32, ArrayError> {
        self.push([value])
    }

    /// Remove the last slot and shrink by one. A trailing hole pops as
    /// `Slot::Absent` but still shortens the array.
    pub fn pop(&mut self) -> Slot {
        if self.length == 0 {
            return Slot::Absent;
        }
        let last = self.length - 1;
        let removed = self.elements.delete(last);
        self.set_length(last);
        removed.into()
    }

    /// Remove the first slot, moving every later slot down by one.
    pub fn shift(&mut self) -> Slot {
        if self.length == 0 {
            return Slot::Absent;
        }
        let removed = self.elements.delete(0);
        self.elements.shift_from(1, -1);
        self.length -= 1;
        removed.into()
    }

    /// Insert `values` at the front, moving existing slots up; returns the new
    /// length.
    pub fn unshift(&mut self, values: impl IntoIterator<Item = Value>) -> Result<u32, ArrayError> {
        let values: Vec<Value> = values.into_iter().collect();
        if values.is_empty() {
            return Ok(self.length);
        }
        let new_len = grown_length(self.length, values.len())?;
        self.elements.shift_from(0, values.len() as i64);
        for (index, value) in values.into_iter().enumerate() {
            self.elements.set(index as u32, value);
        }
        self.length = new_len;
        Ok(new_len)
    }
}
