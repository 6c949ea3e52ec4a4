//! Status bookkeeping shared by the simulators.
//!
//! None of these touch an element already marked [`Status::Sorted`]; that tag
//! is terminal.

use std::ops::RangeInclusive;

use crate::model::{ElementMarker, Status};

/// Returns every non-sorted bar to [`Status::Default`].
pub fn reset_status(array: &mut [ElementMarker]) {
    for bar in array.iter_mut().filter(|b| !b.status.is_sorted()) {
        bar.status = Status::Default;
    }
}

/// Assigns `status` to the non-sorted bars in `range`, clipped to the array.
pub fn set_range_status(array: &mut [ElementMarker], range: RangeInclusive<usize>, status: Status) {
    let (start, end) = range.into_inner();
    if array.is_empty() || start > end {
        return;
    }
    let end = end.min(array.len() - 1);
    for bar in array.iter_mut().take(end + 1).skip(start) {
        if !bar.status.is_sorted() {
            bar.status = status;
        }
    }
}

/// Sets a single bar's status unless it is already sorted.
pub fn set_status(array: &mut [ElementMarker], index: usize, status: Status) {
    if let Some(bar) = array.get_mut(index) {
        if !bar.status.is_sorted() {
            bar.status = status;
        }
    }
}

pub fn mark_all_sorted(array: &mut [ElementMarker]) {
    for bar in array.iter_mut() {
        bar.status = Status::Sorted;
        bar.is_split_after = false;
    }
}

/// Indices `0..n`, the `sorted_indices` of a finished array.
pub fn all_indices(n: usize) -> Vec<usize> {
    (0..n).collect()
}
