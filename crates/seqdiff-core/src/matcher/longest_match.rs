//! Longest contiguous equal run between two sub-ranges.

use super::bucket_index::BucketIndex;
use super::Match;
use std::collections::HashMap;
use std::hash::Hash;

/// Find the longest run with `a[i..i+k] == b[j..j+k]` inside
/// `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
///
/// Only indexed elements can anchor a run. Among runs of equal length the
/// one with the smallest `i` wins, then the smallest `j`. The anchored run is
/// then widened through adjacent equal non-junk elements, and after that
/// through adjacent equal junk elements, so junk is only absorbed next to
/// real content. Empty ranges give a zero-length match at `(a_lo, b_lo)`.
pub fn find_longest_match<T: Eq + Hash + Clone>(
    a: &[T],
    b: &[T],
    index: &BucketIndex<T>,
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> Match {
    debug_assert!(a_lo <= a_hi && a_hi <= a.len());
    debug_assert!(b_lo <= b_hi && b_hi <= b.len());

    let (mut best_i, mut best_j, mut best_size) = (a_lo, b_lo, 0);

    // run length of the match ending at b[j], for the previous and current row of a
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    let mut next_j2len: HashMap<usize, usize> = HashMap::new();
    for (i, elt) in a.iter().enumerate().take(a_hi).skip(a_lo) {
        for &j in index.positions(elt) {
            if j < b_lo {
                continue;
            }
            if j >= b_hi {
                break;
            }
            let k = j
                .checked_sub(1)
                .and_then(|prev| j2len.get(&prev))
                .copied()
                .unwrap_or(0)
                + 1;
            next_j2len.insert(j, k);
            if k > best_size {
                best_i = i + 1 - k;
                best_j = j + 1 - k;
                best_size = k;
            }
        }
        std::mem::swap(&mut j2len, &mut next_j2len);
        next_j2len.clear();
    }

    for absorb_junk in [false, true] {
        while best_i > a_lo
            && best_j > b_lo
            && index.is_junk(&b[best_j - 1]) == absorb_junk
            && a[best_i - 1] == b[best_j - 1]
        {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < a_hi
            && best_j + best_size < b_hi
            && index.is_junk(&b[best_j + best_size]) == absorb_junk
            && a[best_i + best_size] == b[best_j + best_size]
        {
            best_size += 1;
        }
    }

    Match::new(best_i, best_j, best_size)
}
