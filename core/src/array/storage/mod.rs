mod dense;
mod policy;
mod sparse;

pub use dense::DenseElements;
pub use policy::{StorageMode, StoragePolicy};
pub use sparse::SparseElements;

use std::mem;

use crate::value::Value;

/// Present `(index, value)` pairs in ascending index order.
pub type PresentRange<'a> = Box<dyn DoubleEndedIterator<Item = (u32, &'a Value)> + 'a>;

/// Index-keyed slot storage. Implementations never see `length`; the array
/// keeps every stored index below its length.
pub trait ElementStore {
    fn get(&self, index: u32) -> Option<&Value>;

    fn set(&mut self, index: u32, value: Value);

    /// Make the slot absent, returning what it held.
    fn delete(&mut self, index: u32) -> Option<Value>;

    fn highest_index(&self) -> Option<u32>;

    /// Number of present slots.
    fn populated(&self) -> usize;

    /// Remove every slot at or above `len`.
    fn truncate(&mut self, len: u32);

    /// Move every slot at or above `start` by `delta` positions. When `delta`
    /// is negative the `delta` slots below `start` must already be absent.
    fn shift_from(&mut self, start: u32, delta: i64);

    /// Present slots with index in `[start, end)`.
    fn present_range(&self, start: u32, end: u32) -> PresentRange<'_>;

    /// Remove and return every present slot in ascending order.
    fn drain(&mut self) -> Vec<(u32, Value)>;
}

impl From<DenseElements> for SparseElements {
    fn from(mut dense: DenseElements) -> Self {
        SparseElements::from_entries(dense.drain())
    }
}

impl From<SparseElements> for DenseElements {
    fn from(mut sparse: SparseElements) -> Self {
        DenseElements::from_entries(sparse.drain())
    }
}

#[derive(Debug, Clone)]
enum Repr {
    Dense(DenseElements),
    Sparse(SparseElements),
}

/// The backend an array owns. It holds one representation at a time and
/// migrates between them according to its [`StoragePolicy`]; reads, writes and
/// scans behave identically either way.
#[derive(Debug, Clone)]
pub struct Elements {
    repr: Repr,
    policy: StoragePolicy,
}

impl Default for Elements {
    fn default() -> Self {
        Self::new(StoragePolicy::default())
    }
}

impl Elements {
    pub fn new(policy: StoragePolicy) -> Self {
        let repr = match policy.mode {
            StorageMode::SparseOnly => Repr::Sparse(SparseElements::default()),
            StorageMode::Adaptive | StorageMode::DenseOnly => Repr::Dense(DenseElements::default()),
        };
        Self { repr, policy }
    }

    pub fn policy(&self) -> StoragePolicy {
        self.policy
    }

    /// Whether the sparse representation is active. Only diagnostics and
    /// tests should care.
    pub fn is_sparse(&self) -> bool {
        matches!(self.repr, Repr::Sparse(_))
    }

    /// Replace the contents with `entries`, choosing the representation from
    /// their density up front.
    pub(crate) fn rebuild(&mut self, entries: Vec<(u32, Value)>) {
        let span = entries
            .iter()
            .map(|(index, _)| u64::from(*index) + 1)
            .max()
            .unwrap_or(0);
        self.repr = if self.policy.should_sparsify(entries.len(), span) {
            Repr::Sparse(SparseElements::from_entries(entries))
        } else {
            Repr::Dense(DenseElements::from_entries(entries))
        };
    }

    fn store(&self) -> &dyn ElementStore {
        match &self.repr {
            Repr::Dense(dense) => dense,
            Repr::Sparse(sparse) => sparse,
        }
    }

    fn store_mut(&mut self) -> &mut dyn ElementStore {
        match &mut self.repr {
            Repr::Dense(dense) => dense,
            Repr::Sparse(sparse) => sparse,
        }
    }

    fn span(&self) -> u64 {
        self.highest_index().map_or(0, |index| u64::from(index) + 1)
    }

    fn migrate_to_sparse(&mut self) {
        if let Repr::Dense(dense) = &mut self.repr {
            let dense = mem::take(dense);
            let sparse = SparseElements::from(dense);
            tracing::debug!(
                populated = sparse.populated(),
                span = sparse.highest_index().map_or(0, |index| u64::from(index) + 1),
                direction = "dense->sparse",
                "elements switched representation"
            );
            self.repr = Repr::Sparse(sparse);
        }
    }

    fn migrate_to_dense(&mut self) {
        if let Repr::Sparse(sparse) = &mut self.repr {
            let sparse = mem::take(sparse);
            let dense = DenseElements::from(sparse);
            tracing::debug!(
                populated = dense.populated(),
                span = dense.slot_count(),
                direction = "sparse->dense",
                "elements switched representation"
            );
            self.repr = Repr::Dense(dense);
        }
    }

    fn rebalance(&mut self) {
        let populated = self.populated();
        let span = self.span();
        if self.is_sparse() {
            if self.policy.should_densify(populated, span) {
                self.migrate_to_dense();
            }
        } else if self.policy.should_sparsify(populated, span) {
            self.migrate_to_sparse();
        }
    }
}

impl ElementStore for Elements {
    fn get(&self, index: u32) -> Option<&Value> {
        self.store().get(index)
    }

    fn set(&mut self, index: u32, value: Value) {
        // Decide before a dense vector would grow to reach `index`.
        let sparsify = match &self.repr {
            Repr::Dense(dense) => {
                index as usize >= dense.slot_count()
                    && self
                        .policy
                        .should_sparsify(dense.populated() + 1, u64::from(index) + 1)
            }
            Repr::Sparse(_) => false,
        };
        if sparsify {
            self.migrate_to_sparse();
        }

        let before = self.populated();
        self.store_mut().set(index, value);

        if let Repr::Sparse(sparse) = &self.repr {
            let populated = sparse.populated();
            if populated > before && self.policy.should_densify(populated, self.span()) {
                self.migrate_to_dense();
            }
        }
    }

    fn delete(&mut self, index: u32) -> Option<Value> {
        let removed = self.store_mut().delete(index)?;
        if let Repr::Dense(dense) = &self.repr {
            // Trailing holes are trimmed, so the slot count is the span.
            if self
                .policy
                .should_sparsify(dense.populated(), dense.slot_count() as u64)
            {
                self.migrate_to_sparse();
            }
        }
        Some(removed)
    }

    fn highest_index(&self) -> Option<u32> {
        self.store().highest_index()
    }

    fn populated(&self) -> usize {
        self.store().populated()
    }

    fn truncate(&mut self, len: u32) {
        self.store_mut().truncate(len);
        self.rebalance();
    }

    /// Opening a gap skips the rebalance: the caller is about to fill it.
    fn shift_from(&mut self, start: u32, delta: i64) {
        self.store_mut().shift_from(start, delta);
        if delta < 0 {
            self.rebalance();
        }
    }

    fn present_range(&self, start: u32, end: u32) -> PresentRange<'_> {
        self.store().present_range(start, end)
    }

    fn drain(&mut self) -> Vec<(u32, Value)> {
        self.store_mut().drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_write_switches_to_sparse() {
        let mut elements = Elements::default();
        elements.set(0, Value::from(1));
        elements.set(1_000_000, Value::from(2));
        assert!(elements.is_sparse());
        assert_eq!(elements.populated(), 2);
        assert_eq!(elements.get(1_000_000), Some(&Value::from(2)));
    }

    #[test]
    fn deleting_most_elements_switches_to_sparse() {
        let mut elements = Elements::default();
        for index in 0..100_000u32 {
            elements.set(index, Value::from(index));
        }
        assert!(!elements.is_sparse());
        for index in 0..99_999u32 {
            elements.delete(index);
        }
        assert!(elements.is_sparse());
        assert_eq!(elements.populated(), 1);
        assert_eq!(elements.get(99_999), Some(&Value::from(99_999u32)));
        assert_eq!(elements.highest_index(), Some(99_999));
    }

    #[test]
    fn deleting_a_few_elements_stays_dense() {
        let mut elements = Elements::default();
        for index in 0..1_000u32 {
            elements.set(index, Value::from(index));
        }
        for index in (0..1_000u32).step_by(2) {
            elements.delete(index);
        }
        assert!(!elements.is_sparse());
        assert_eq!(elements.populated(), 500);
    }

    #[test]
    fn opening_a_gap_does_not_migrate() {
        let mut elements = Elements::default();
        elements.set(0, Value::from(1));
        elements.shift_from(0, 100);
        assert!(!elements.is_sparse());
        for index in 0..100 {
            elements.set(index, Value::from(index));
        }
        assert!(!elements.is_sparse());
        assert_eq!(elements.get(100), Some(&Value::from(1)));
        assert_eq!(elements.populated(), 101);
    }

    #[test]
    fn small_arrays_stay_dense() {
        let mut elements = Elements::default();
        elements.set(40, Value::from(1));
        assert!(!elements.is_sparse());
    }

    #[test]
    fn filling_a_sparse_array_switches_back() {
        let mut elements = Elements::default();
        elements.set(199, Value::Null);
        assert!(elements.is_sparse());
        for index in 0..100 {
            elements.set(index, Value::from(index));
        }
        assert!(!elements.is_sparse());
        assert_eq!(elements.populated(), 101);
        assert_eq!(elements.get(199), Some(&Value::Null));
    }

    #[test]
    fn dense_only_never_switches() {
        let mut elements = Elements::new(StoragePolicy::dense_only());
        elements.set(10_000, Value::from(1));
        assert!(!elements.is_sparse());
    }

    #[test]
    fn truncating_a_sparse_array_can_make_it_dense() {
        let mut elements = Elements::default();
        elements.set(0, Value::from(0));
        elements.set(1, Value::from(1));
        elements.set(5_000, Value::from(2));
        assert!(elements.is_sparse());
        elements.truncate(2);
        assert!(!elements.is_sparse());
        assert_eq!(elements.populated(), 2);
    }
}
