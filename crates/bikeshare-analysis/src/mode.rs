//! Counting helpers shared by the statistic groups.

use std::collections::BTreeMap;

fn count<T: Ord>(values: impl IntoIterator<Item = T>) -> BTreeMap<T, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value; ties go to the lowest value. `None` for no input.
pub fn mode<T: Ord>(values: impl IntoIterator<Item = T>) -> Option<T> {
    let mut best: Option<(T, usize)> = None;
    // Ascending iteration, so a later value only wins with a strictly higher count
    for (value, n) in count(values) {
        if best.as_ref().map_or(true, |(_, top)| n > *top) {
            best = Some((value, n));
        }
    }
    best.map(|(value, _)| value)
}

/// Distinct values with their counts, most frequent first, ties by value.
pub fn value_counts<T: Ord>(values: impl IntoIterator<Item = T>) -> Vec<(T, usize)> {
    let mut counts: Vec<(T, usize)> = count(values).into_iter().collect();
    // Stable sort keeps the ascending value order within equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
