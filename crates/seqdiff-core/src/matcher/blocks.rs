//! Assembly of the full matching-block list.

use super::bucket_index::BucketIndex;
use super::longest_match::find_longest_match;
use super::Match;
use std::hash::Hash;

/// Align `a` against `b` by repeatedly taking the longest match of a range
/// and queueing the unmatched ranges on either side of it.
///
/// The result is sorted by position, has adjacent blocks merged and always
/// ends with the `(a.len(), b.len(), 0)` sentinel.
pub fn assemble<T: Eq + Hash + Clone>(a: &[T], b: &[T], index: &BucketIndex<T>) -> Vec<Match> {
    let (la, lb) = (a.len(), b.len());

    let mut worklist = vec![(0, la, 0, lb)];
    let mut found: Vec<Match> = Vec::new();
    while let Some((a_lo, a_hi, b_lo, b_hi)) = worklist.pop() {
        let m = find_longest_match(a, b, index, a_lo, a_hi, b_lo, b_hi);
        if m.size == 0 {
            continue;
        }
        if a_lo < m.a && b_lo < m.b {
            worklist.push((a_lo, m.a, b_lo, m.b));
        }
        if m.a_end() < a_hi && m.b_end() < b_hi {
            worklist.push((m.a_end(), a_hi, m.b_end(), b_hi));
        }
        found.push(m);
    }
    found.sort_unstable();

    let mut blocks: Vec<Match> = Vec::with_capacity(found.len() + 1);
    for m in found {
        match blocks.last_mut() {
            Some(prev) if prev.a_end() == m.a && prev.b_end() == m.b => prev.size += m.size,
            _ => blocks.push(m),
        }
    }
    blocks.push(Match::new(la, lb, 0));

    tracing::trace!(a_len = la, b_len = lb, blocks = blocks.len() - 1, "matching blocks assembled");
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks_of(a: &str, b: &str) -> Vec<Match> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let index = BucketIndex::build(&b, None, true);
        assemble(&a, &b, &index)
    }

    #[test]
    fn test_blocks_with_gap() {
        assert_eq!(
            blocks_of("abxcd", "abcd"),
            vec![Match::new(0, 0, 2), Match::new(3, 2, 2), Match::new(5, 4, 0)]
        );
    }

    #[test]
    fn test_adjacent_blocks_are_merged() {
        // The junk space is only absorbed at the edge of "x", so "y" is found
        // by a second search and merged onto the first run.
        let a: Vec<char> = "x y".chars().collect();
        let b = a.clone();
        let isjunk: crate::matcher::JunkFn<char> = std::sync::Arc::new(|c: &char| *c == ' ');
        let index = BucketIndex::build(&b, Some(&isjunk), true);
        assert_eq!(
            assemble(&a, &b, &index),
            vec![Match::new(0, 0, 3), Match::new(3, 3, 0)]
        );
    }

    #[test]
    fn test_empty_inputs_give_only_sentinel() {
        assert_eq!(blocks_of("", ""), vec![Match::new(0, 0, 0)]);
        assert_eq!(blocks_of("abc", ""), vec![Match::new(3, 0, 0)]);
    }

    #[test]
    fn test_disjoint_inputs_give_only_sentinel() {
        assert_eq!(blocks_of("abc", "xyz"), vec![Match::new(3, 3, 0)]);
    }
}
