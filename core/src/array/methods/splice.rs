use super::{relative_end, relative_index};
use crate::array::length::grown_length;
use crate::array::storage::ElementStore;
use crate::array::JsArray;
use crate::errors::ArrayError;
use crate::value::Value;

impl JsArray {
    /// Remove `delete_count` slots at `start` and insert `items` in their
    /// place. `None` for the count removes through the end. The removed
    /// region comes back as a new array with its holes intact.
    pub fn splice(
        &mut self,
        start: i64,
        delete_count: Option<i64>,
        items: impl IntoIterator<Item = Value>,
    ) -> Result<JsArray, ArrayError> {
        let len = self.length;
        let start = relative_index(start, len);
        let available = len - start;
        let delete = match delete_count {
            None => available,
            Some(count) => count.clamp(0, i64::from(available)) as u32,
        };
        let items: Vec<Value> = items.into_iter().collect();
        let new_len = grown_length(len - delete, items.len())?;

        let removed_entries: Vec<u32> = self
            .value_scan_range(start, start + delete)
            .map(|(index, _)| index)
            .collect();
        let mut removed = self.sibling();
        for index in removed_entries {
            if let Some(value) = self.elements.delete(index) {
                removed.elements.set(index - start, value);
            }
        }
        removed.length = delete;

        let delta = items.len() as i64 - i64::from(delete);
        if delta != 0 {
            self.elements.shift_from(start + delete, delta);
        }
        for (offset, item) in items.into_iter().enumerate() {
            self.elements.set(start + offset as u32, item);
        }
        self.length = new_len;
        Ok(removed)
    }

    /// Write `value` into every index of `[start, end)`. The range ends up
    /// with no holes.
    pub fn fill(&mut self, value: &Value, start: i64, end: Option<i64>) {
        let len = self.length;
        let start = relative_index(start, len);
        let end = relative_end(end, len);
        for index in start..end {
            self.elements.set(index, value.clone());
        }
    }

    /// Copy the slot states of `[start, end)` to `target`, as if the whole
    /// source were read before anything is written. Length never changes.
    pub fn copy_within(&mut self, target: i64, start: i64, end: Option<i64>) {
        let len = self.length;
        let to = relative_index(target, len);
        let from = relative_index(start, len);
        let until = relative_end(end, len);
        let count = until.saturating_sub(from).min(len - to);
        if count == 0 {
            return;
        }

        let source: Vec<(u32, Value)> = self
            .value_scan_range(from, from + count)
            .map(|(index, value)| (index - from, value.clone()))
            .collect();
        let overwritten: Vec<u32> = self
            .value_scan_range(to, to + count)
            .map(|(index, _)| index)
            .collect();
        for index in overwritten {
            self.elements.delete(index);
        }
        for (offset, value) in source {
            self.elements.set(to + offset, value);
        }
    }

    /// A new array holding the slots of `[start, end)`, holes preserved.
    pub fn slice(&self, start: i64, end: Option<i64>) -> JsArray {
        let len = self.length;
        let start = relative_index(start, len);
        let end = relative_end(end, len);
        let mut out = self.sibling();
        for (index, value) in self.value_scan_range(start, end) {
            out.elements.set(index - start, value.clone());
        }
        out.length = end.saturating_sub(start);
        out
    }
}
