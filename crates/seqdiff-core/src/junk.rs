//! Default junk predicates for line and character comparison.

use crate::matcher::JunkFn;
use std::sync::Arc;

/// Predicate over whole lines, used by [`Differ`](crate::differ::Differ).
pub type LineJunkFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// True for a line that is blank or holds a single `#` amid whitespace.
///
/// Whitespace is the ECMAScript `\s` class: Unicode white space without NEL
/// (U+0085), plus the byte order mark (U+FEFF).
pub fn is_line_junk(line: &str) -> bool {
    matches!(line.trim_matches(is_pattern_space), "" | "#")
}

fn is_pattern_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// True for space and tab.
pub fn is_character_junk(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

pub fn line_junk() -> LineJunkFn {
    Arc::new(is_line_junk)
}

pub fn character_junk() -> JunkFn<char> {
    Arc::new(|ch: &char| is_character_junk(*ch))
}
