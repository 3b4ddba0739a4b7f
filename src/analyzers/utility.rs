use std::collections::BTreeMap;

use crate::error::EmptyResultError;

/// Counts occurrences of each value, keyed in ascending order.
pub fn tally<K: Ord, I: IntoIterator<Item = K>>(values: I) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Returns the most frequent key and its count.
///
/// Ties go to the smallest key, since keys are visited in ascending order and
/// only a strictly higher count replaces the current best.
pub fn most_common<K: Ord + Clone>(
    counts: &BTreeMap<K, usize>,
) -> Result<(K, usize), EmptyResultError> {
    let mut best: Option<(&K, usize)> = None;
    for (key, &count) in counts {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((key, count));
        }
    }
    best.map(|(k, c)| (k.clone(), c)).ok_or(EmptyResultError)
}

/// Statistical mode with the smallest-value tie-break of [`most_common`].
pub fn mode<K: Ord + Clone, I: IntoIterator<Item = K>>(values: I) -> Result<K, EmptyResultError> {
    most_common(&tally(values)).map(|(k, _)| k)
}

/// Computes the arithmetic mean of a slice of values.
pub fn mean(values: &[f64]) -> Result<f64, EmptyResultError> {
    if values.is_empty() {
        return Err(EmptyResultError);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn min_max<T: Ord + Copy, I: IntoIterator<Item = T>>(
    values: I,
) -> Result<(T, T), EmptyResultError> {
    values
        .into_iter()
        .fold(None, |acc: Option<(T, T)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .ok_or(EmptyResultError)
}
