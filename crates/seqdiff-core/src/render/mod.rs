//! Patch-style renderers.
//!
//! Both renderers align the inputs line by line, group the opcodes into
//! hunks with [`DiffOptions::n`] lines of context, and emit nothing at all
//! when the inputs are equal. Input lines are copied verbatim, so lines are
//! expected to carry their own terminator; header and range lines end with
//! [`DiffOptions::lineterm`].

pub mod context;
pub mod unified;

pub use context::{context_diff, format_range_context};
pub use unified::{format_range_unified, unified_diff};

use crate::matcher::{Matcher, Opcode, DEFAULT_CONTEXT};

/// Header and layout settings shared by the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    pub fromfile: String,
    pub tofile: String,
    pub fromfiledate: String,
    pub tofiledate: String,
    /// Lines of context around each change.
    pub n: usize,
    pub lineterm: String,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            fromfile: String::new(),
            tofile: String::new(),
            fromfiledate: String::new(),
            tofiledate: String::new(),
            n: DEFAULT_CONTEXT,
            lineterm: "\n".to_string(),
        }
    }
}

impl DiffOptions {
    pub fn with_files(mut self, fromfile: impl Into<String>, tofile: impl Into<String>) -> Self {
        self.fromfile = fromfile.into();
        self.tofile = tofile.into();
        self
    }

    pub fn with_dates(
        mut self,
        fromfiledate: impl Into<String>,
        tofiledate: impl Into<String>,
    ) -> Self {
        self.fromfiledate = fromfiledate.into();
        self.tofiledate = tofiledate.into();
        self
    }

    pub fn with_context(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    pub fn with_lineterm(mut self, lineterm: impl Into<String>) -> Self {
        self.lineterm = lineterm.into();
        self
    }

    /// `name` followed by a tab and `date` when a date is set.
    fn header(name: &str, date: &str) -> String {
        if date.is_empty() {
            name.to_string()
        } else {
            format!("{}\t{}", name, date)
        }
    }

    pub(crate) fn from_header(&self) -> String {
        Self::header(&self.fromfile, &self.fromfiledate)
    }

    pub(crate) fn to_header(&self) -> String {
        Self::header(&self.tofile, &self.tofiledate)
    }
}

/// Line-level hunks of `a` against `b`.
pub(crate) fn hunks(a: &[&str], b: &[&str], n: usize) -> Vec<Vec<Opcode>> {
    Matcher::new(a, b).grouped_opcodes(n)
}

/// The a-range and b-range spanned by a non-empty hunk.
pub(crate) fn hunk_span(group: &[Opcode]) -> ((usize, usize), (usize, usize)) {
    match (group.first(), group.last()) {
        (Some(first), Some(last)) => (
            (first.a_start, last.a_end),
            (first.b_start, last.b_end),
        ),
        _ => ((0, 0), (0, 0)),
    }
}
