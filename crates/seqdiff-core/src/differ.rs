//! Human-readable line deltas.
//!
//! [`Differ`] compares two sequences of lines. Every output line starts with
//! a two-character code:
//!
//! | code   | meaning                                 |
//! |--------|-----------------------------------------|
//! | `"- "` | line unique to sequence A               |
//! | `"+ "` | line unique to sequence B               |
//! | `"  "` | line common to both                     |
//! | `"? "` | intraline hints for the line above it   |
//!
//! Replaced blocks are searched for the most similar pair of lines; that pair
//! is shown with `?` hint lines marking changed (`^`), deleted (`-`) and
//! inserted (`+`) characters, and the lines around it are handled the same
//! way recursively.

use crate::junk::{character_junk, LineJunkFn};
use crate::matcher::{JunkFn, Matcher, MatcherOptions, Tag};
use crate::sequence::Sequence;
use crate::{log_op_end, log_op_start};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Best-ratio floor a candidate line pair must beat to be considered.
const FANCY_SEED_RATIO: f64 = 0.74;
/// A pair below this ratio is not shown as a modified line.
const FANCY_CUTOFF: f64 = 0.75;

/// Line-oriented delta generator.
#[derive(Clone, Default)]
pub struct Differ {
    linejunk: Option<LineJunkFn>,
    charjunk: Option<JunkFn<char>>,
}

impl Differ {
    pub fn new(linejunk: Option<LineJunkFn>, charjunk: Option<JunkFn<char>>) -> Self {
        Self { linejunk, charjunk }
    }

    /// Produce the delta turning `a` into `b`.
    ///
    /// Lines are emitted verbatim after their code, so lines that carry their
    /// own terminator produce terminated output. `?` hint lines always end
    /// with `"\n"`.
    pub fn compare<S: AsRef<str>>(&self, a: &[S], b: &[S]) -> Vec<String> {
        log_op_start!("differ_compare", a_len = a.len(), b_len = b.len());
        let start = Instant::now();

        let a: Vec<&str> = a.iter().map(AsRef::as_ref).collect();
        let b: Vec<&str> = b.iter().map(AsRef::as_ref).collect();

        let mut options = MatcherOptions::<&str>::default();
        if let Some(linejunk) = &self.linejunk {
            let linejunk = Arc::clone(linejunk);
            options = options.with_junk(Arc::new(move |line: &&str| linejunk(*line)));
        }
        let cruncher = Matcher::with_options(options, a.as_slice(), b.as_slice());

        let mut delta = Delta {
            a: &a,
            b: &b,
            charjunk: self.charjunk.clone(),
            out: Vec::new(),
        };
        for code in cruncher.opcodes() {
            let (alo, ahi, blo, bhi) = (code.a_start, code.a_end, code.b_start, code.b_end);
            match code.tag {
                Tag::Replace => delta.fancy_replace(alo, ahi, blo, bhi),
                Tag::Delete => delta.dump('-', Side::A, alo, ahi),
                Tag::Insert => delta.dump('+', Side::B, blo, bhi),
                Tag::Equal => delta.dump(' ', Side::A, alo, ahi),
            }
        }

        log_op_end!(
            "differ_compare",
            duration_ms = start.elapsed().as_millis() as u64,
            lines = delta.out.len()
        );
        delta.out
    }
}

impl fmt::Debug for Differ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Differ")
            .field("linejunk", &self.linejunk.is_some())
            .field("charjunk", &self.charjunk.is_some())
            .finish()
    }
}

/// Output state of one comparison.
struct Delta<'s, 'a> {
    a: &'s [&'a str],
    b: &'s [&'a str],
    charjunk: Option<JunkFn<char>>,
    out: Vec<String>,
}

impl Delta<'_, '_> {
    fn lines(&self, side: Side) -> &[&str] {
        match side {
            Side::A => self.a,
            Side::B => self.b,
        }
    }

    fn dump(&mut self, tag: char, side: Side, lo: usize, hi: usize) {
        for i in lo..hi {
            let line = format!("{} {}", tag, self.lines(side)[i]);
            self.out.push(line);
        }
    }

    fn plain_replace(&mut self, alo: usize, ahi: usize, blo: usize, bhi: usize) {
        debug_assert!(alo < ahi && blo < bhi);
        if bhi - blo < ahi - alo {
            self.dump('+', Side::B, blo, bhi);
            self.dump('-', Side::A, alo, ahi);
        } else {
            self.dump('-', Side::A, alo, ahi);
            self.dump('+', Side::B, blo, bhi);
        }
    }

    fn char_matcher(&self) -> Matcher<char> {
        let mut options = MatcherOptions::<char>::default();
        if let Some(charjunk) = &self.charjunk {
            options = options.with_junk(Arc::clone(charjunk));
        }
        Matcher::with_options(options, Sequence::default(), Sequence::default())
    }

    fn fancy_replace(&mut self, alo: usize, ahi: usize, blo: usize, bhi: usize) {
        let mut cruncher = self.char_matcher();
        let a_chars: Vec<Sequence<char>> =
            self.a[alo..ahi].iter().map(|line| Sequence::from(*line)).collect();

        let mut best_ratio = FANCY_SEED_RATIO;
        let mut best: Option<(usize, usize)> = None;
        let mut first_identical: Option<(usize, usize)> = None;
        for j in blo..bhi {
            let bj = self.b[j];
            cruncher.set_seq_b(bj);
            for i in alo..ahi {
                if self.a[i] == bj {
                    first_identical.get_or_insert((i, j));
                    continue;
                }
                cruncher.set_seq_a(a_chars[i - alo].clone());
                if cruncher.real_quick_ratio() > best_ratio
                    && cruncher.quick_ratio() > best_ratio
                    && cruncher.ratio() > best_ratio
                {
                    best_ratio = cruncher.ratio();
                    best = Some((i, j));
                }
            }
        }

        let (besti, bestj, identical) = match best {
            Some((i, j)) if best_ratio >= FANCY_CUTOFF => (i, j, false),
            _ => match first_identical {
                Some((i, j)) => (i, j, true),
                None => {
                    self.plain_replace(alo, ahi, blo, bhi);
                    return;
                }
            },
        };
        tracing::trace!(besti, bestj, best_ratio, identical, "fancy replace pair");

        self.fancy_helper(alo, besti, blo, bestj);

        let (aelt, belt) = (self.a[besti], self.b[bestj]);
        if identical {
            self.out.push(format!("  {}", aelt));
        } else {
            cruncher.set_seqs(a_chars[besti - alo].clone(), belt);
            let mut atags = String::new();
            let mut btags = String::new();
            for code in cruncher.opcodes() {
                let (la, lb) = (code.a_end - code.a_start, code.b_end - code.b_start);
                let (amark, bmark) = match code.tag {
                    Tag::Replace => ('^', '^'),
                    Tag::Delete => ('-', ' '),
                    Tag::Insert => (' ', '+'),
                    Tag::Equal => (' ', ' '),
                };
                atags.extend(std::iter::repeat(amark).take(la));
                btags.extend(std::iter::repeat(bmark).take(lb));
            }
            self.qformat(aelt, belt, &atags, &btags);
        }

        self.fancy_helper(besti + 1, ahi, bestj + 1, bhi);
    }

    fn fancy_helper(&mut self, alo: usize, ahi: usize, blo: usize, bhi: usize) {
        match (alo < ahi, blo < bhi) {
            (true, true) => self.fancy_replace(alo, ahi, blo, bhi),
            (true, false) => self.dump('-', Side::A, alo, ahi),
            (false, true) => self.dump('+', Side::B, blo, bhi),
            (false, false) => {}
        }
    }

    fn qformat(&mut self, aline: &str, bline: &str, atags: &str, btags: &str) {
        let mut common = count_leading(aline, '\t').min(count_leading(bline, '\t'));
        common = common.min(count_leading(&atags[..common.min(atags.len())], ' '));
        common = common.min(count_leading(&btags[..common.min(btags.len())], ' '));
        let atags = atags.get(common..).unwrap_or("").trim_end();
        let btags = btags.get(common..).unwrap_or("").trim_end();
        let tabs = "\t".repeat(common);

        self.out.push(format!("- {}", aline));
        if !atags.is_empty() {
            self.out.push(format!("? {}{}\n", tabs, atags));
        }
        self.out.push(format!("+ {}", bline));
        if !btags.is_empty() {
            self.out.push(format!("? {}{}\n", tabs, btags));
        }
    }
}

fn count_leading(line: &str, ch: char) -> usize {
    line.chars().take_while(|&c| c == ch).count()
}

/// Which input of a delta to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

/// Compare lines the way a human reviewer would want: no line junk, and
/// spaces and tabs ignored as anchors inside lines.
pub fn ndiff<S: AsRef<str>>(a: &[S], b: &[S]) -> Vec<String> {
    ndiff_with(a, b, None, Some(character_junk()))
}

pub fn ndiff_with<S: AsRef<str>>(
    a: &[S],
    b: &[S],
    linejunk: Option<LineJunkFn>,
    charjunk: Option<JunkFn<char>>,
) -> Vec<String> {
    Differ::new(linejunk, charjunk).compare(a, b)
}

/// Recover one of the two inputs of a delta.
///
/// Common lines and the lines unique to `side` are kept with their code
/// stripped; hint lines are dropped.
pub fn restore<S: AsRef<str>>(delta: &[S], side: Side) -> Vec<String> {
    let keep = match side {
        Side::A => "- ",
        Side::B => "+ ",
    };
    delta
        .iter()
        .map(AsRef::as_ref)
        .filter_map(|line| {
            let code = line.get(..2)?;
            (code == "  " || code == keep).then(|| line[2..].to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_leading() {
        assert_eq!(count_leading("\t\tx", '\t'), 2);
        assert_eq!(count_leading("x\t", '\t'), 0);
        assert_eq!(count_leading("", ' '), 0);
    }

    #[test]
    fn test_plain_replace_puts_shorter_side_first() {
        let a = ["a1\n", "a2\n"];
        let b = ["b1\n"];
        let mut delta = Delta {
            a: &a,
            b: &b,
            charjunk: None,
            out: Vec::new(),
        };
        delta.plain_replace(0, 2, 0, 1);
        assert_eq!(delta.out, vec!["+ b1\n", "- a1\n", "- a2\n"]);
    }

    #[test]
    fn test_qformat_keeps_common_leading_tabs() {
        let a = ["\tabc\n"];
        let b = ["\tabd\n"];
        let mut delta = Delta {
            a: &a,
            b: &b,
            charjunk: None,
            out: Vec::new(),
        };
        delta.qformat(a[0], b[0], "   ^ ", "   ^ ");
        assert_eq!(
            delta.out,
            vec!["- \tabc\n", "? \t  ^\n", "+ \tabd\n", "? \t  ^\n"]
        );
    }

    #[test]
    fn test_identical_pair_anchors_when_nothing_is_close() {
        let a = ["abcdefgh\n", "same\n"];
        let b = ["zzzzzzzz\n", "same\n"];
        let mut delta = Delta {
            a: &a,
            b: &b,
            charjunk: None,
            out: Vec::new(),
        };
        delta.fancy_replace(0, 2, 0, 2);
        assert_eq!(
            delta.out,
            vec!["- abcdefgh\n", "+ zzzzzzzz\n", "  same\n"]
        );
    }

    #[test]
    fn test_restore_skips_malformed_lines() {
        let delta = ["  x\n", "?", "- y\n", "+ z\n"];
        assert_eq!(restore(&delta, Side::A), vec!["x\n", "y\n"]);
        assert_eq!(restore(&delta, Side::B), vec!["x\n", "z\n"]);
    }
}
