use std::collections::BTreeMap;
use std::iter;
use std::mem;

use super::{ElementStore, PresentRange};
use crate::value::Value;

/// Map-backed storage; only populated indices take space.
#[derive(Debug, Clone, Default)]
pub struct SparseElements {
    map: BTreeMap<u32, Value>,
}

impl SparseElements {
    pub fn from_entries(entries: Vec<(u32, Value)>) -> Self {
        Self {
            map: entries.into_iter().collect(),
        }
    }
}

impl ElementStore for SparseElements {
    fn get(&self, index: u32) -> Option<&Value> {
        self.map.get(&index)
    }

    fn set(&mut self, index: u32, value: Value) {
        self.map.insert(index, value);
    }

    fn delete(&mut self, index: u32) -> Option<Value> {
        self.map.remove(&index)
    }

    fn highest_index(&self) -> Option<u32> {
        self.map.last_key_value().map(|(index, _)| *index)
    }

    fn populated(&self) -> usize {
        self.map.len()
    }

    fn truncate(&mut self, len: u32) {
        self.map.split_off(&len);
    }

    fn shift_from(&mut self, start: u32, delta: i64) {
        if delta == 0 {
            return;
        }
        // A negative shift overwrites the `delta` slots below `start`.
        let from = u32::try_from(i64::from(start) + delta.min(0)).unwrap_or(0);
        let tail = self.map.split_off(&from);
        for (index, value) in tail.into_iter().filter(|(index, _)| *index >= start) {
            let moved = i64::from(index) + delta;
            if let Ok(moved) = u32::try_from(moved) {
                self.map.insert(moved, value);
            }
        }
    }

    fn present_range(&self, start: u32, end: u32) -> PresentRange<'_> {
        if start >= end {
            return Box::new(iter::empty());
        }
        Box::new(self.map.range(start..end).map(|(index, value)| (*index, value)))
    }

    fn drain(&mut self) -> Vec<(u32, Value)> {
        mem::take(&mut self.map).into_iter().collect()
    }
}
