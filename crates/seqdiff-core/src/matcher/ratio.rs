//! Similarity ratio helpers shared by the three estimators.

use std::collections::HashMap;
use std::hash::Hash;

/// `2 * matches / length`, or 1.0 when both sequences are empty.
pub fn calculate_ratio(matches: usize, length: usize) -> f64 {
    if length == 0 {
        1.0
    } else {
        2.0 * matches as f64 / length as f64
    }
}

/// Occurrence count of every element.
pub fn element_counts<T: Eq + Hash + Clone>(seq: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for elt in seq {
        *counts.entry(elt.clone()).or_insert(0) += 1;
    }
    counts
}

/// Size of the multiset intersection of `a` with the counted sequence.
pub fn multiset_overlap<T: Eq + Hash>(a: &[T], counts: &HashMap<T, usize>) -> usize {
    let mut available: HashMap<&T, usize> = HashMap::new();
    let mut matches = 0;
    for elt in a {
        let left = available
            .entry(elt)
            .or_insert_with(|| counts.get(elt).copied().unwrap_or(0));
        if *left > 0 {
            *left -= 1;
            matches += 1;
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_ratio() {
        assert_eq!(calculate_ratio(0, 0), 1.0);
        assert_eq!(calculate_ratio(0, 10), 0.0);
        assert_eq!(calculate_ratio(3, 8), 0.75);
    }

    #[test]
    fn test_multiset_overlap_never_overdraws() {
        let counts = element_counts(&['a', 'b', 'b']);
        assert_eq!(multiset_overlap(&['b', 'b', 'b', 'a', 'a', 'c'], &counts), 3);
    }
}
