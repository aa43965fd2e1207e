//! Element → position index over the second sequence.

use super::JunkFn;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Sequences shorter than this are never subject to autojunk.
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// Occurrence count above which an element of a sequence of length `len`
/// counts as popular: 1% of the length, plus one.
pub fn popularity_threshold(len: usize) -> usize {
    len / 100 + 1
}

/// Positions of every indexable element of B, plus the elements that were
/// excluded from the index as junk or as popular.
#[derive(Debug, Clone)]
pub struct BucketIndex<T> {
    b2j: HashMap<T, Vec<usize>>,
    junk: HashSet<T>,
    popular: HashSet<T>,
}

impl<T: Eq + Hash + Clone> BucketIndex<T> {
    /// Index `b`, dropping elements flagged by `isjunk` and, when `autojunk`
    /// is set and `b` is long enough, elements that occur too often.
    pub fn build(b: &[T], isjunk: Option<&JunkFn<T>>, autojunk: bool) -> Self {
        let mut b2j: HashMap<T, Vec<usize>> = HashMap::new();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(elt.clone()).or_default().push(j);
        }

        let mut junk = HashSet::new();
        if let Some(isjunk) = isjunk {
            b2j.retain(|elt, _| {
                let flagged = isjunk(elt);
                if flagged {
                    junk.insert(elt.clone());
                }
                !flagged
            });
        }

        let mut popular = HashSet::new();
        if autojunk && b.len() >= AUTOJUNK_MIN_LEN {
            let threshold = popularity_threshold(b.len());
            b2j.retain(|elt, positions| {
                let flagged = positions.len() > threshold;
                if flagged {
                    popular.insert(elt.clone());
                }
                !flagged
            });
        }

        tracing::trace!(
            b_len = b.len(),
            indexed = b2j.len(),
            junk = junk.len(),
            popular = popular.len(),
            "bucket index built"
        );

        Self { b2j, junk, popular }
    }

    /// Ascending positions of `elt` in B; empty when absent or excluded.
    pub fn positions(&self, elt: &T) -> &[usize] {
        self.b2j.get(elt).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True if the caller's junk predicate flagged `elt`.
    pub fn is_junk(&self, elt: &T) -> bool {
        self.junk.contains(elt)
    }

    /// True if autojunk dropped `elt` for occurring too often.
    pub fn is_popular(&self, elt: &T) -> bool {
        self.popular.contains(elt)
    }

    pub fn junk(&self) -> &HashSet<T> {
        &self.junk
    }

    pub fn popular(&self) -> &HashSet<T> {
        &self.popular
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_positions_are_ascending() {
        let index = BucketIndex::build(&['a', 'b', 'a', 'c', 'a'], None, true);
        assert_eq!(index.positions(&'a'), &[0, 2, 4]);
        assert_eq!(index.positions(&'c'), &[3]);
        assert!(index.positions(&'z').is_empty());
    }

    #[test]
    fn test_junk_elements_are_removed_but_queryable() {
        let isjunk: JunkFn<char> = Arc::new(|c: &char| *c == ' ');
        let index = BucketIndex::build(&['a', ' ', 'b', ' '], Some(&isjunk), true);
        assert!(index.positions(&' ').is_empty());
        assert!(index.is_junk(&' '));
        assert!(!index.is_junk(&'a'));
        assert!(!index.is_popular(&' '));
    }

    #[test]
    fn test_popularity_threshold() {
        assert_eq!(popularity_threshold(200), 3);
        assert_eq!(popularity_threshold(299), 3);
        assert_eq!(popularity_threshold(300), 4);
    }

    #[test]
    fn test_autojunk_requires_minimum_length() {
        let b: Vec<u32> = std::iter::repeat(7).take(AUTOJUNK_MIN_LEN - 1).collect();
        let index = BucketIndex::build(&b, None, true);
        assert!(!index.is_popular(&7));
        assert_eq!(index.positions(&7).len(), AUTOJUNK_MIN_LEN - 1);
    }

    #[test]
    fn test_autojunk_drops_elements_above_threshold_only() {
        // 300 elements: threshold is 4. Element 1 occurs 4 times, element 2 five times.
        let mut b: Vec<u32> = (100..391).collect();
        b.extend([1, 1, 1, 1, 2, 2, 2, 2, 2]);
        assert_eq!(b.len(), 300);

        let index = BucketIndex::build(&b, None, true);
        assert!(!index.is_popular(&1));
        assert_eq!(index.positions(&1).len(), 4);
        assert!(index.is_popular(&2));
        assert!(index.positions(&2).is_empty());
    }

    #[test]
    fn test_autojunk_disabled_keeps_everything() {
        let b: Vec<u32> = std::iter::repeat(7).take(500).collect();
        let index = BucketIndex::build(&b, None, false);
        assert!(index.popular().is_empty());
        assert_eq!(index.positions(&7).len(), 500);
    }
}
