//! Context diff format.

use super::{hunk_span, hunks, DiffOptions};
use crate::matcher::{Opcode, Tag};
use crate::{log_op_end, log_op_start};
use std::time::Instant;

/// Range of a context hunk header: inclusive `start,end` (1-based), or a
/// single number when the range has at most one line.
pub fn format_range_context(start: usize, stop: usize) -> String {
    let mut beginning = start + 1;
    let length = stop - start;
    if length == 0 {
        beginning -= 1;
    }
    if length <= 1 {
        return beginning.to_string();
    }
    format!("{},{}", beginning, beginning + length - 1)
}

fn prefix(tag: Tag) -> &'static str {
    match tag {
        Tag::Insert => "+ ",
        Tag::Delete => "- ",
        Tag::Replace => "! ",
        Tag::Equal => "  ",
    }
}

/// Render the differences between `a` and `b` as a context diff.
pub fn context_diff<S: AsRef<str>>(a: &[S], b: &[S], options: &DiffOptions) -> Vec<String> {
    log_op_start!("context_diff", a_len = a.len(), b_len = b.len(), n = options.n);
    let start = Instant::now();

    let a: Vec<&str> = a.iter().map(AsRef::as_ref).collect();
    let b: Vec<&str> = b.iter().map(AsRef::as_ref).collect();
    let lineterm = &options.lineterm;

    let mut lines = Vec::new();
    let groups = hunks(&a, &b, options.n);
    for (idx, group) in groups.iter().enumerate() {
        if idx == 0 {
            lines.push(format!("*** {}{}", options.from_header(), lineterm));
            lines.push(format!("--- {}{}", options.to_header(), lineterm));
        }
        let ((a1, a2), (b1, b2)) = hunk_span(group);
        lines.push(format!("***************{}", lineterm));

        lines.push(format!("*** {} ****{}", format_range_context(a1, a2), lineterm));
        if has_any(group, &[Tag::Replace, Tag::Delete]) {
            for code in group.iter().filter(|c| c.tag != Tag::Insert) {
                let mark = prefix(code.tag);
                lines.extend(a[code.a_range()].iter().map(|line| format!("{}{}", mark, line)));
            }
        }

        lines.push(format!("--- {} ----{}", format_range_context(b1, b2), lineterm));
        if has_any(group, &[Tag::Replace, Tag::Insert]) {
            for code in group.iter().filter(|c| c.tag != Tag::Delete) {
                let mark = prefix(code.tag);
                lines.extend(b[code.b_range()].iter().map(|line| format!("{}{}", mark, line)));
            }
        }
    }

    log_op_end!(
        "context_diff",
        duration_ms = start.elapsed().as_millis() as u64,
        hunks = groups.len(),
        lines = lines.len()
    );
    lines
}

fn has_any(group: &[Opcode], tags: &[Tag]) -> bool {
    group.iter().any(|code| tags.contains(&code.tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_range_context() {
        assert_eq!(format_range_context(3, 4), "4");
        assert_eq!(format_range_context(3, 6), "4,6");
        assert_eq!(format_range_context(3, 3), "3");
        assert_eq!(format_range_context(0, 0), "0");
    }

    #[test]
    fn test_pure_insert_hunk_has_no_a_lines() {
        let a = ["x\n"];
        let b = ["x\n", "y\n"];
        assert_eq!(
            context_diff(&a, &b, &DiffOptions::default()),
            vec![
                "*** \n",
                "--- \n",
                "***************\n",
                "*** 1 ****\n",
                "--- 1,2 ----\n",
                "  x\n",
                "+ y\n",
            ]
        );
    }
}
