//! seqdiff core - sequence matching and human-readable deltas
//!
//! This crate compares pairs of sequences of hashable elements, including:
//! - A junk-aware sequence matcher with memoized alignment and similarity ratios
//! - Opcodes and context-windowed hunks describing how to turn one sequence into the other
//! - A line differ with intraline hints for near-identical lines
//! - Unified and context patch renderers
//! - Close-match ranking for words
//!
//! The matching engine has no failure modes; errors only arise at the
//! boundaries (argument validation and file loading).

pub mod close_matches;
pub mod differ;
pub mod errors;
pub mod junk;
pub mod logging_facility;
pub mod matcher;
pub mod render;
pub mod sequence;
pub mod text;

pub use seqdiff_core_types::schema;

// Re-export commonly used types
pub use close_matches::get_close_matches;
pub use differ::{ndiff, ndiff_with, restore, Differ, Side};
pub use errors::{DiffError, ExError, ExErrorKind, Result};
pub use junk::{is_character_junk, is_line_junk, LineJunkFn};
pub use matcher::{JunkFn, Match, Matcher, MatcherOptions, Opcode, Tag};
pub use render::{context_diff, unified_diff, DiffOptions};
pub use sequence::Sequence;
