//! First-match item lookup over slices.
//!
//! A single forward pass with early exit. The result is the lowest index whose
//! element equals the target, so duplicates later in the slice are never
//! reported.

use std::borrow::Borrow;

/// Integer sentinel returned by [`locate_or_sentinel`] when nothing matches.
pub const NOT_FOUND: i64 = -1;

/// Returns the index of the first element equal to `target`, or `None`.
///
/// `T: Borrow<Q>` lets a `&[String]` be searched with a `&str` without
/// allocating.
pub fn locate<T, Q>(items: &[T], target: &Q) -> Option<usize>
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    locate_by(items, |item| <T as Borrow<Q>>::borrow(item) == target)
}

/// Returns the index of the first element for which `pred` holds.
pub fn locate_by<T, F>(items: &[T], mut pred: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    for (idx, item) in items.iter().enumerate() {
        if pred(item) {
            return Some(idx);
        }
    }
    None
}

/// Same as [`locate`] but maps "not found" to [`NOT_FOUND`].
pub fn locate_or_sentinel<T, Q>(items: &[T], target: &Q) -> i64
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    match locate(items, target) {
        // Slices never exceed isize::MAX elements.
        Some(idx) => idx as i64,
        None => NOT_FOUND,
    }
}
