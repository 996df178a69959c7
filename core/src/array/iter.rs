//! Traversal modes over an array.
//!
//! * [`IndexScan`] visits every index below the length captured at creation;
//!   holes come out as `None`.
//! * [`ValueScan`] visits only present slots, as `(index, value)` pairs.
//! * [`ArrayCursor`] is a self-resuming cursor over a shared array. It re-reads
//!   the length on every step, so growth during iteration is observed and
//!   shrinkage ends it early.

use std::iter::FusedIterator;

use super::storage::{ElementStore, PresentRange};
use super::JsArray;
use crate::value::{ArrayRef, Value};

pub struct IndexScan<'a> {
    array: &'a JsArray,
    next: u32,
    end: u32,
}

impl<'a> Iterator for IndexScan<'a> {
    type Item = Option<&'a Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.array.elements.get(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for IndexScan<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.array.elements.get(self.end))
    }
}

impl ExactSizeIterator for IndexScan<'_> {}

impl FusedIterator for IndexScan<'_> {}

pub struct ValueScan<'a> {
    inner: PresentRange<'a>,
}

impl<'a> Iterator for ValueScan<'a> {
    type Item = (u32, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl DoubleEndedIterator for ValueScan<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl JsArray {
    pub fn index_scan(&self) -> IndexScan<'_> {
        IndexScan {
            array: self,
            next: 0,
            end: self.length,
        }
    }

    pub fn value_scan(&self) -> ValueScan<'_> {
        self.value_scan_range(0, self.length)
    }

    /// Present slots with index in `[start, end)`, clipped to the length.
    pub fn value_scan_range(&self, start: u32, end: u32) -> ValueScan<'_> {
        ValueScan {
            inner: self.elements.present_range(start, end.min(self.length)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
    Keys,
    Values,
    Entries,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IterStep {
    pub value: Value,
    pub done: bool,
}

impl IterStep {
    fn finished() -> Self {
        Self {
            value: Value::Undefined,
            done: true,
        }
    }
}

/// Once a cursor reports `done` it drops its array and stays done.
#[derive(Debug, Clone)]
pub struct ArrayCursor {
    array: Option<ArrayRef>,
    next: u32,
    kind: CursorKind,
}

impl ArrayCursor {
    pub fn new(array: ArrayRef, kind: CursorKind) -> Self {
        Self {
            array: Some(array),
            next: 0,
            kind,
        }
    }

    pub fn values(array: ArrayRef) -> Self {
        Self::new(array, CursorKind::Values)
    }

    pub fn keys(array: ArrayRef) -> Self {
        Self::new(array, CursorKind::Keys)
    }

    pub fn entries(array: ArrayRef) -> Self {
        Self::new(array, CursorKind::Entries)
    }

    /// Index the next `advance` will visit.
    pub fn position(&self) -> u32 {
        self.next
    }

    pub fn is_done(&self) -> bool {
        self.array.is_none()
    }

    pub fn advance(&mut self) -> IterStep {
        let produced = match self.array.as_ref() {
            None => None,
            Some(array) => {
                let arr = array.borrow();
                if self.next >= arr.len() {
                    None
                } else {
                    let index = self.next;
                    self.next += 1;
                    Some(match self.kind {
                        CursorKind::Keys => Value::from(index),
                        CursorKind::Values => arr.get_index(index).into_value(),
                        CursorKind::Entries => {
                            let value = arr.get_index(index).into_value();
                            Value::from(JsArray::from_values([Value::from(index), value]))
                        }
                    })
                }
            }
        };

        match produced {
            Some(value) => IterStep { value, done: false },
            None => {
                self.array = None;
                IterStep::finished()
            }
        }
    }
}

impl Iterator for ArrayCursor {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let step = self.advance();
        if step.done { None } else { Some(step.value) }
    }
}

impl FusedIterator for ArrayCursor {}
