//! In-place partition-exchange sort keyed by a selectable record field.

use std::cmp::Ordering;

use crate::key::{NameOrdering, SortKey};
use crate::record::Record;

/// Sort the whole slice ascending by `key`.
///
/// Unstable: equal keys keep no particular relative order. Average
/// O(n log n); worst case O(n²) because the pivot is always the last element
/// of the range, which degrades on already-sorted input. Fine at catalog
/// scale.
pub fn sort(records: &mut [Record], key: SortKey, names: NameOrdering) {
    if records.len() > 1 {
        let cmp = key.comparator(names);
        sort_range(records, 0, records.len() - 1, cmp);
    }
}

/// Recursive quicksort over the inclusive range `[start, end]`.
fn sort_range(records: &mut [Record], start: usize, end: usize, cmp: fn(&Record, &Record) -> Ordering) {
    if start >= end {
        return;
    }
    let split = partition(records, start, end, cmp);
    if split > start {
        sort_range(records, start, split - 1, cmp);
    }
    if split < end {
        sort_range(records, split + 1, end, cmp);
    }
}

/// Partition `[start, end]` around the element at `end`: every element
/// ordered before the pivot is swapped into the next free slot from `start`,
/// then the pivot lands in the split index, which is returned.
fn partition(
    records: &mut [Record],
    start: usize,
    end: usize,
    cmp: fn(&Record, &Record) -> Ordering,
) -> usize {
    let mut slot = start;
    for probe in start..end {
        if cmp(&records[probe], &records[end]) == Ordering::Less {
            records.swap(slot, probe);
            slot += 1;
        }
    }
    records.swap(slot, end);
    slot
}
