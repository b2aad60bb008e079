//! Sorted index slices used as vertex sets during the search.

use std::cmp::Ordering;

/// Returns the elements common to both sorted slices.
pub(crate) fn intersect(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let mut idx_a = 0;
    let mut idx_b = 0;
    while idx_a < a.len() && idx_b < b.len() {
        match a[idx_a].cmp(&b[idx_b]) {
            Ordering::Less => idx_a += 1,
            Ordering::Greater => idx_b += 1,
            Ordering::Equal => {
                out.push(a[idx_a]);
                idx_a += 1;
                idx_b += 1;
            }
        }
    }
    out
}

/// Inserts `value` keeping the vector sorted; no-op when already present.
pub(crate) fn insert_sorted(set: &mut Vec<usize>, value: usize) {
    if let Err(position) = set.binary_search(&value) {
        set.insert(position, value);
    }
}

/// Removes `value` from the sorted vector if present.
pub(crate) fn remove_sorted(set: &mut Vec<usize>, value: usize) {
    if let Ok(position) = set.binary_search(&value) {
        set.remove(position);
    }
}
