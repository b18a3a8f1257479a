//! Small aggregation helpers shared by the metric modules.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Arithmetic mean of a slice of values. Returns 0.0 for empty input;
/// callers that must distinguish the empty case check before calling.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Frequency of each distinct key, returned in first-appearance order.
///
/// Callers sort as needed; a stable descending sort on the count keeps
/// first-appearance order among ties, which is the tie-break the top-N
/// tables require.
pub(crate) fn value_counts<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut counts: HashMap<K, usize> = HashMap::new();
    let mut order: Vec<K> = Vec::new();

    for key in keys {
        match counts.entry(key) {
            Entry::Occupied(mut entry) => *entry.get_mut() += 1,
            Entry::Vacant(entry) => {
                order.push(entry.key().clone());
                entry.insert(1);
            }
        }
    }

    order
        .into_iter()
        .map(|key| {
            let count = counts[&key];
            (key, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn value_counts_first_appearance_order() {
        let counts = value_counts(vec![3, 1, 3, 2, 1, 3]);
        assert_eq!(counts, vec![(3, 3), (1, 2), (2, 1)]);
    }

    #[test]
    fn value_counts_empty() {
        let counts: Vec<(i64, usize)> = value_counts(Vec::new());
        assert!(counts.is_empty());
    }
}
