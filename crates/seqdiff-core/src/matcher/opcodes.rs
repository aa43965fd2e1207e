//! Edit operations derived from matching blocks, and their grouping into
//! display hunks.

use super::Match;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Kind of an edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    /// `a[a_start..a_end] == b[b_start..b_end]`
    Equal,
    /// `a[a_start..a_end]` should be replaced by `b[b_start..b_end]`
    Replace,
    /// `a[a_start..a_end]` should be deleted; the b range is empty
    Delete,
    /// `b[b_start..b_end]` should be inserted at `a_start`; the a range is empty
    Insert,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Equal => "equal",
            Tag::Replace => "replace",
            Tag::Delete => "delete",
            Tag::Insert => "insert",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One tagged pair of ranges describing how to turn part of A into part of B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Opcode {
    pub tag: Tag,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

impl Opcode {
    pub const fn new(tag: Tag, a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> Self {
        Self {
            tag,
            a_start,
            a_end,
            b_start,
            b_end,
        }
    }

    pub fn a_range(&self) -> Range<usize> {
        self.a_start..self.a_end
    }

    pub fn b_range(&self) -> Range<usize> {
        self.b_start..self.b_end
    }
}

/// Turn a sentinel-terminated block list into opcodes covering both
/// sequences from start to end.
pub fn from_blocks(blocks: &[Match]) -> Vec<Opcode> {
    let (mut i, mut j) = (0, 0);
    let mut codes = Vec::new();
    for m in blocks {
        let tag = match (i < m.a, j < m.b) {
            (true, true) => Some(Tag::Replace),
            (true, false) => Some(Tag::Delete),
            (false, true) => Some(Tag::Insert),
            (false, false) => None,
        };
        if let Some(tag) = tag {
            codes.push(Opcode::new(tag, i, m.a, j, m.b));
        }
        i = m.a_end();
        j = m.b_end();
        if m.size > 0 {
            codes.push(Opcode::new(Tag::Equal, m.a, i, m.b, j));
        }
    }
    codes
}

/// Split opcodes into hunks with at most `n` lines of context around each
/// change.
///
/// Leading and trailing equal runs are clipped to `n`; an equal run longer
/// than `2n` ends one hunk and starts the next. A hunk made of nothing but
/// context is dropped, so identical inputs produce no hunks.
pub fn group(codes: &[Opcode], n: usize) -> Vec<Vec<Opcode>> {
    let mut codes: Vec<Opcode> = if codes.is_empty() {
        vec![Opcode::new(Tag::Equal, 0, 1, 0, 1)]
    } else {
        codes.to_vec()
    };

    if let Some(first) = codes.first_mut().filter(|c| c.tag == Tag::Equal) {
        first.a_start = first.a_start.max(first.a_end.saturating_sub(n));
        first.b_start = first.b_start.max(first.b_end.saturating_sub(n));
    }
    if let Some(last) = codes.last_mut().filter(|c| c.tag == Tag::Equal) {
        last.a_end = last.a_end.min(last.a_start.saturating_add(n));
        last.b_end = last.b_end.min(last.b_start.saturating_add(n));
    }

    let nn = n.saturating_add(n);
    let mut groups = Vec::new();
    let mut current = Vec::new();
    for mut code in codes {
        if code.tag == Tag::Equal && code.a_end - code.a_start > nn {
            current.push(Opcode::new(
                Tag::Equal,
                code.a_start,
                code.a_end.min(code.a_start.saturating_add(n)),
                code.b_start,
                code.b_end.min(code.b_start.saturating_add(n)),
            ));
            groups.push(std::mem::take(&mut current));
            code.a_start = code.a_start.max(code.a_end.saturating_sub(n));
            code.b_start = code.b_start.max(code.b_end.saturating_sub(n));
        }
        current.push(code);
    }
    if !current.is_empty() && !(current.len() == 1 && current[0].tag == Tag::Equal) {
        groups.push(current);
    }
    groups
}
