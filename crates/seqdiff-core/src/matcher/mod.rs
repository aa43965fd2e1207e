//! Sequence matcher.
//!
//! A [`Matcher`] aligns two sequences of hashable elements. Sequence B is
//! indexed once per assignment ([`BucketIndex`]); the alignment itself is
//! computed lazily from longest common runs and memoized until either
//! sequence is replaced. All derived views (blocks, opcodes, hunks, ratios)
//! read from the memoized alignment.
//!
//! ```
//! use seqdiff_core::matcher::{Matcher, Match};
//!
//! let m = Matcher::<char>::new("abxcd", "abcd");
//! assert_eq!(m.matching_blocks()[0], Match::new(0, 0, 2));
//! ```

pub mod blocks;
pub mod bucket_index;
pub mod longest_match;
pub mod opcodes;
pub mod ratio;

pub use bucket_index::BucketIndex;
pub use opcodes::{Opcode, Tag};

use crate::sequence::Sequence;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Predicate marking elements of B that must never anchor a match.
pub type JunkFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Default number of context elements around each change in a hunk.
pub const DEFAULT_CONTEXT: usize = 3;

/// A common run: `a[a..a+size] == b[b..b+size]`.
///
/// Ordering is by `a`, then `b`, then `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

impl Match {
    pub const fn new(a: usize, b: usize, size: usize) -> Self {
        Self { a, b, size }
    }

    pub const fn a_end(&self) -> usize {
        self.a + self.size
    }

    pub const fn b_end(&self) -> usize {
        self.b + self.size
    }
}

/// Matcher configuration.
pub struct MatcherOptions<T> {
    /// Elements of B for which this returns true are junk.
    pub isjunk: Option<JunkFn<T>>,
    /// Treat elements occurring in more than 1% (+1) of a B of length 200 or
    /// more as popular and leave them out of the index.
    pub autojunk: bool,
}

impl<T> MatcherOptions<T> {
    pub fn with_junk(mut self, isjunk: JunkFn<T>) -> Self {
        self.isjunk = Some(isjunk);
        self
    }

    pub fn with_autojunk(mut self, autojunk: bool) -> Self {
        self.autojunk = autojunk;
        self
    }
}

impl<T> Default for MatcherOptions<T> {
    fn default() -> Self {
        Self {
            isjunk: None,
            autojunk: true,
        }
    }
}

impl<T> Clone for MatcherOptions<T> {
    fn clone(&self) -> Self {
        Self {
            isjunk: self.isjunk.clone(),
            autojunk: self.autojunk,
        }
    }
}

impl<T> fmt::Debug for MatcherOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherOptions")
            .field("isjunk", &self.isjunk.as_ref().map(|_| "<fn>"))
            .field("autojunk", &self.autojunk)
            .finish()
    }
}

/// Pairwise sequence matcher with memoized alignment.
///
/// Replacing a sequence with a new handle drops every memoized result;
/// assigning a clone of the current handle is a no-op. Replacing A keeps the
/// index of B.
pub struct Matcher<T> {
    options: MatcherOptions<T>,
    a: Sequence<T>,
    b: Sequence<T>,
    index: BucketIndex<T>,
    matching_blocks: OnceCell<Vec<Match>>,
    opcodes: OnceCell<Vec<Opcode>>,
    b_counts: OnceCell<HashMap<T, usize>>,
}

impl<T: Eq + Hash + Clone> Matcher<T> {
    /// Matcher over `a` and `b` with default options.
    pub fn new(a: impl Into<Sequence<T>>, b: impl Into<Sequence<T>>) -> Self {
        Self::with_options(MatcherOptions::default(), a, b)
    }

    pub fn with_options(
        options: MatcherOptions<T>,
        a: impl Into<Sequence<T>>,
        b: impl Into<Sequence<T>>,
    ) -> Self {
        let b = b.into();
        let index = BucketIndex::build(&b, options.isjunk.as_ref(), options.autojunk);
        Self {
            options,
            a: a.into(),
            b,
            index,
            matching_blocks: OnceCell::new(),
            opcodes: OnceCell::new(),
            b_counts: OnceCell::new(),
        }
    }

    pub fn options(&self) -> &MatcherOptions<T> {
        &self.options
    }

    pub fn set_seqs(&mut self, a: impl Into<Sequence<T>>, b: impl Into<Sequence<T>>) {
        self.set_seq_a(a);
        self.set_seq_b(b);
    }

    /// Replace A. The index of B is kept.
    pub fn set_seq_a(&mut self, a: impl Into<Sequence<T>>) {
        let a = a.into();
        if a.is_same(&self.a) {
            return;
        }
        self.a = a;
        self.reset_alignment();
    }

    /// Replace B and rebuild its index.
    pub fn set_seq_b(&mut self, b: impl Into<Sequence<T>>) {
        let b = b.into();
        if b.is_same(&self.b) {
            return;
        }
        self.index = BucketIndex::build(&b, self.options.isjunk.as_ref(), self.options.autojunk);
        self.b = b;
        self.b_counts = OnceCell::new();
        self.reset_alignment();
    }

    fn reset_alignment(&mut self) {
        self.matching_blocks = OnceCell::new();
        self.opcodes = OnceCell::new();
    }

    pub fn seq_a(&self) -> &Sequence<T> {
        &self.a
    }

    pub fn seq_b(&self) -> &Sequence<T> {
        &self.b
    }

    pub fn bucket_index(&self) -> &BucketIndex<T> {
        &self.index
    }

    /// Longest matching run inside `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
    pub fn find_longest_match(&self, a_lo: usize, a_hi: usize, b_lo: usize, b_hi: usize) -> Match {
        longest_match::find_longest_match(&self.a, &self.b, &self.index, a_lo, a_hi, b_lo, b_hi)
    }

    /// Non-overlapping common runs in increasing order, with adjacent runs
    /// merged, terminated by the `(len(a), len(b), 0)` sentinel.
    pub fn matching_blocks(&self) -> &[Match] {
        self.matching_blocks
            .get_or_init(|| blocks::assemble(&self.a, &self.b, &self.index))
    }

    /// Edit operations turning A into B, covering both sequences contiguously.
    pub fn opcodes(&self) -> &[Opcode] {
        self.opcodes
            .get_or_init(|| opcodes::from_blocks(self.matching_blocks()))
    }

    /// Opcodes split into hunks with `n` elements of context.
    pub fn grouped_opcodes(&self, n: usize) -> Vec<Vec<Opcode>> {
        opcodes::group(self.opcodes(), n)
    }

    /// `2 * M / T` where M is the total size of the matching blocks and T the
    /// combined length. Identical empty sequences score 1.0.
    pub fn ratio(&self) -> f64 {
        let matches: usize = self.matching_blocks().iter().map(|m| m.size).sum();
        ratio::calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// Upper bound on [`ratio`](Self::ratio) from the multiset overlap.
    pub fn quick_ratio(&self) -> f64 {
        let counts = self.b_counts.get_or_init(|| ratio::element_counts(&self.b));
        let matches = ratio::multiset_overlap(&self.a, counts);
        ratio::calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// Upper bound on [`quick_ratio`](Self::quick_ratio) from the lengths only.
    pub fn real_quick_ratio(&self) -> f64 {
        let (la, lb) = (self.a.len(), self.b.len());
        ratio::calculate_ratio(la.min(lb), la + lb)
    }
}

impl<T: Eq + Hash + Clone> Default for Matcher<T> {
    fn default() -> Self {
        Self::new(Sequence::default(), Sequence::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Matcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("options", &self.options)
            .field("a", &self.a)
            .field("b", &self.b)
            .field("aligned", &self.matching_blocks.get().is_some())
            .finish()
    }
}
