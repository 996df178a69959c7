use super::storage::ElementStore;
use super::JsArray;
use crate::errors::ArrayError;

pub const MAX_LENGTH: u32 = u32::MAX;
pub const MAX_INDEX: u32 = MAX_LENGTH - 1;

/// Validate a requested length. The value is truncated toward zero first;
/// anything left outside `[0, 2^32 - 1]`, or not finite, is rejected.
pub fn coerce_length(value: f64) -> Result<u32, ArrayError> {
    if !value.is_finite() {
        return Err(ArrayError::InvalidLength { value });
    }
    let truncated = value.trunc();
    if truncated < 0.0 || truncated > f64::from(MAX_LENGTH) {
        return Err(ArrayError::InvalidLength { value });
    }
    Ok(truncated as u32)
}

/// Length after appending `extra` slots to `current`.
pub(crate) fn grown_length(current: u32, extra: usize) -> Result<u32, ArrayError> {
    let grown = u64::from(current).saturating_add(extra as u64);
    u32::try_from(grown).map_err(|_| ArrayError::InvalidLength {
        value: grown as f64,
    })
}

impl JsArray {
    pub(crate) fn on_set(&mut self, index: u32) {
        if index >= self.length {
            self.length = index + 1;
        }
    }

    /// Deleting leaves a hole; `length` does not move.
    pub(crate) fn on_delete(&mut self, _index: u32) {}

    /// Shrinking removes every slot at or above `new_len`; growing only moves
    /// the bound and leaves trailing holes.
    pub fn set_length(&mut self, new_len: u32) {
        if new_len < self.length {
            tracing::trace!(from = self.length, to = new_len, "truncating array");
            self.elements.truncate(new_len);
        }
        self.length = new_len;
    }

    /// [`set_length`](Self::set_length) for an uncoerced numeric request.
    pub fn set_length_from(&mut self, value: f64) -> Result<u32, ArrayError> {
        let new_len = coerce_length(value)?;
        self.set_length(new_len);
        Ok(new_len)
    }
}
