use std::cmp::Ordering;

use crate::array::storage::ElementStore;
use crate::array::JsArray;
use crate::value::Value;

/// Runs at most this long are insertion sorted before merging.
const INSERTION_RUN: usize = 16;

impl JsArray {
    /// Reverse slot states in place: index `i` trades with `len - 1 - i`.
    pub fn reverse(&mut self) {
        let len = self.length;
        if len < 2 {
            return;
        }
        let mut entries: Vec<(u32, Value)> = self
            .elements
            .drain()
            .into_iter()
            .map(|(index, value)| (len - 1 - index, value))
            .collect();
        entries.reverse();
        self.elements.rebuild(entries);
    }

    /// Stable sort of the present values by `compare`. Sorted values fill the
    /// front, holes collect at the end and the length is unchanged. An
    /// inconsistent comparator yields an unspecified order but never panics.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        let values: Vec<Value> = self
            .elements
            .drain()
            .into_iter()
            .map(|(_, value)| value)
            .collect();
        let sorted = merge_sort(values, &mut compare);
        self.elements.rebuild(
            sorted
                .into_iter()
                .enumerate()
                .map(|(index, value)| (index as u32, value))
                .collect(),
        );
    }

    /// Sort with [`default_compare`].
    pub fn sort(&mut self) {
        self.sort_by(default_compare);
    }
}

/// The order used when no comparator is given: `undefined` after everything
/// else, the rest by their string forms in UTF-16 code unit order.
pub fn default_compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Undefined, Value::Undefined) => Ordering::Equal,
        (Value::Undefined, _) => Ordering::Greater,
        (_, Value::Undefined) => Ordering::Less,
        _ => {
            let a = a.to_js_string();
            let b = b.to_js_string();
            a.encode_utf16().cmp(b.encode_utf16())
        }
    }
}

/// Top-down merge sort. Only ever compares and moves owned values, so a
/// comparator that is not a total order cannot break it.
fn merge_sort<F>(mut items: Vec<Value>, compare: &mut F) -> Vec<Value>
where
    F: FnMut(&Value, &Value) -> Ordering,
{
    if items.len() <= INSERTION_RUN {
        insertion_sort(&mut items, compare);
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, compare);
    let right = merge_sort(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        // Ties take from the left run, which keeps the sort stable.
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged
}

fn insertion_sort<F>(items: &mut [Value], compare: &mut F)
where
    F: FnMut(&Value, &Value) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j], &items[j - 1]) == Ordering::Less {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}
