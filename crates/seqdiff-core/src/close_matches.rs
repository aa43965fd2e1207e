//! Ranking of "good enough" matches for a word.

use crate::errors::{DiffError, Result};
use crate::matcher::Matcher;
use crate::{log_op_end, log_op_error, log_op_start};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Default maximum number of matches returned.
pub const DEFAULT_N: usize = 3;
/// Default similarity a candidate must reach.
pub const DEFAULT_CUTOFF: f64 = 0.6;

struct Scored<'a> {
    score: f64,
    candidate: &'a str,
}

impl Ord for Scored<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.candidate.cmp(other.candidate))
    }
}

impl PartialOrd for Scored<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Scored<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scored<'_> {}

/// Return up to `n` of `possibilities` whose character similarity to `word`
/// is at least `cutoff`, most similar first.
///
/// Candidates with equal scores are ordered by descending text.
///
/// # Errors
///
/// [`DiffError::InvalidCount`] when `n` is zero and
/// [`DiffError::InvalidCutoff`] when `cutoff` lies outside `[0.0, 1.0]`.
pub fn get_close_matches<'a, S: AsRef<str>>(
    word: &str,
    possibilities: &'a [S],
    n: usize,
    cutoff: f64,
) -> Result<Vec<&'a str>> {
    log_op_start!(
        "get_close_matches",
        candidates = possibilities.len(),
        n = n,
        cutoff = cutoff
    );
    let start = Instant::now();

    let validated = if n == 0 {
        Err(DiffError::InvalidCount { n })
    } else if !(0.0..=1.0).contains(&cutoff) {
        Err(DiffError::InvalidCutoff { cutoff })
    } else {
        Ok(())
    };
    if let Err(err) = validated {
        log_op_error!(
            "get_close_matches",
            err.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        return Err(err);
    }

    let mut matcher = Matcher::<char>::default();
    matcher.set_seq_b(word);
    let mut heap = BinaryHeap::new();
    for candidate in possibilities.iter().map(AsRef::as_ref) {
        matcher.set_seq_a(candidate);
        if matcher.real_quick_ratio() >= cutoff
            && matcher.quick_ratio() >= cutoff
            && matcher.ratio() >= cutoff
        {
            heap.push(Scored {
                score: matcher.ratio(),
                candidate,
            });
        }
    }

    let mut result = Vec::with_capacity(n.min(heap.len()));
    while result.len() < n {
        match heap.pop() {
            Some(best) => result.push(best.candidate),
            None => break,
        }
    }

    log_op_end!(
        "get_close_matches",
        duration_ms = start.elapsed().as_millis() as u64,
        matches = result.len()
    );
    Ok(result)
}
