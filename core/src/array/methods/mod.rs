//! Bulk operators built on the accessor and storage primitives. Every
//! operator that moves slots moves their state, so holes stay holes.

mod combine;
mod order;
mod search;
mod splice;
mod stack;

pub use order::default_compare;

/// Resolve a relative position: negative values count back from `len`, the
/// result is clamped to `[0, len]`.
pub(crate) fn relative_index(position: i64, len: u32) -> u32 {
    let len = i64::from(len);
    let resolved = if position < 0 {
        len.saturating_add(position).max(0)
    } else {
        position.min(len)
    };
    resolved as u32
}

/// The exclusive end of a range; `None` means the whole length.
pub(crate) fn relative_end(end: Option<i64>, len: u32) -> u32 {
    end.map_or(len, |end| relative_index(end, len))
}
