use std::iter;
use std::mem;

use super::{ElementStore, PresentRange};
use crate::array::Slot;
use crate::value::Value;

/// Contiguous storage: index equals position. Holes past the last present
/// slot are never stored, so the vector's last element is always present.
#[derive(Debug, Clone, Default)]
pub struct DenseElements {
    slots: Vec<Slot>,
    populated: usize,
}

impl DenseElements {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            populated: 0,
        }
    }

    /// Build from `(index, value)` pairs; later duplicates win.
    pub fn from_entries(entries: Vec<(u32, Value)>) -> Self {
        let span = entries
            .iter()
            .map(|(index, _)| *index as usize + 1)
            .max()
            .unwrap_or(0);
        let mut dense = Self::with_capacity(span);
        for (index, value) in entries {
            dense.set(index, value);
        }
        dense
    }

    /// Number of physical slots, holes included.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn trim_trailing_holes(&mut self) {
        while matches!(self.slots.last(), Some(Slot::Absent)) {
            self.slots.pop();
        }
    }
}

impl ElementStore for DenseElements {
    fn get(&self, index: u32) -> Option<&Value> {
        self.slots.get(index as usize).and_then(Slot::as_value)
    }

    fn set(&mut self, index: u32, value: Value) {
        let index = index as usize;
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, Slot::default);
        }
        if mem::replace(&mut self.slots[index], Slot::Present(value)).is_absent() {
            self.populated += 1;
        }
    }

    fn delete(&mut self, index: u32) -> Option<Value> {
        let slot = self.slots.get_mut(index as usize)?;
        let previous = mem::take(slot).into_option();
        if previous.is_some() {
            self.populated -= 1;
            self.trim_trailing_holes();
        }
        previous
    }

    fn highest_index(&self) -> Option<u32> {
        self.slots.len().checked_sub(1).map(|index| index as u32)
    }

    fn populated(&self) -> usize {
        self.populated
    }

    fn truncate(&mut self, len: u32) {
        let len = len as usize;
        if len >= self.slots.len() {
            return;
        }
        let removed = self.slots[len..].iter().filter(|slot| slot.is_present()).count();
        self.populated -= removed;
        self.slots.truncate(len);
        self.trim_trailing_holes();
    }

    fn shift_from(&mut self, start: u32, delta: i64) {
        let start = start as usize;
        if start >= self.slots.len() || delta == 0 {
            return;
        }
        if delta > 0 {
            let gap = iter::repeat_with(Slot::default).take(delta as usize);
            self.slots.splice(start..start, gap);
        } else {
            let from = start.saturating_sub(delta.unsigned_abs() as usize);
            let dropped = self
                .slots
                .drain(from..start)
                .filter(Slot::is_present)
                .count();
            self.populated -= dropped;
            self.trim_trailing_holes();
        }
    }

    fn present_range(&self, start: u32, end: u32) -> PresentRange<'_> {
        let end = (end as usize).min(self.slots.len());
        let start = (start as usize).min(end);
        Box::new(
            self.slots[start..end]
                .iter()
                .enumerate()
                .filter_map(move |(offset, slot)| {
                    slot.as_value().map(|value| ((start + offset) as u32, value))
                }),
        )
    }

    fn drain(&mut self) -> Vec<(u32, Value)> {
        self.populated = 0;
        mem::take(&mut self.slots)
            .into_iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.into_option().map(|value| (index as u32, value)))
            .collect()
    }
}
