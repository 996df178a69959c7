mod access;
pub mod dispatch;
pub mod iter;
mod length;
mod methods;
mod slot;
pub mod storage;

pub use dispatch::call_array_method;
pub use iter::{ArrayCursor, CursorKind, IndexScan, IterStep, ValueScan};
pub use length::{coerce_length, MAX_INDEX, MAX_LENGTH};
pub use methods::default_compare;
pub use slot::Slot;
pub use storage::{StorageMode, StoragePolicy};

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::value::{ArrayRef, Value};
use storage::{ElementStore, Elements};

/// An indexed collection with a `length` bound, optional holes and a side
/// table of ordinary named properties.
///
/// Invariant: no slot is stored at an index at or above `length`.
#[derive(Debug, Clone, Default)]
pub struct JsArray {
    length: u32,
    elements: Elements,
    properties: IndexMap<String, Value>,
}

impl JsArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: StoragePolicy) -> Self {
        Self {
            length: 0,
            elements: Elements::new(policy),
            properties: IndexMap::new(),
        }
    }

    /// A packed array holding `values` at indices `0..n`.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        let mut arr = Self::new();
        for (index, value) in values.into_iter().enumerate().take(MAX_LENGTH as usize) {
            arr.elements.set(index as u32, value);
            arr.length = index as u32 + 1;
        }
        arr
    }

    /// Like [`from_values`](Self::from_values) but `Slot::Absent` leaves a hole.
    pub fn from_slots(slots: impl IntoIterator<Item = Slot>) -> Self {
        let mut arr = Self::new();
        for (index, slot) in slots.into_iter().enumerate().take(MAX_LENGTH as usize) {
            if let Slot::Present(value) = slot {
                arr.elements.set(index as u32, value);
            }
            arr.length = index as u32 + 1;
        }
        arr
    }

    /// An empty array sharing this array's storage policy.
    pub(crate) fn sibling(&self) -> Self {
        Self::with_policy(self.policy())
    }

    pub fn len(&self) -> u32 {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of present slots; never more than `len()`.
    pub fn populated(&self) -> usize {
        self.elements.populated()
    }

    pub fn highest_index(&self) -> Option<u32> {
        self.elements.highest_index()
    }

    pub fn policy(&self) -> StoragePolicy {
        self.elements.policy()
    }

    pub fn is_sparse(&self) -> bool {
        self.elements.is_sparse()
    }

    /// Every slot in index order, holes included.
    pub fn to_slots(&self) -> Vec<Slot> {
        self.index_scan()
            .map(|slot| Slot::from(slot.cloned()))
            .collect()
    }

    pub fn wrapped(self) -> ArrayRef {
        Rc::new(RefCell::new(self))
    }
}
