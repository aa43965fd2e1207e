//! Unified diff format.

use super::{hunk_span, hunks, DiffOptions};
use crate::matcher::Tag;
use crate::{log_op_end, log_op_start};
use std::time::Instant;

/// Range of a unified hunk header: 1-based start, then `,length` unless
/// the length is one. An empty range names the line before it.
pub fn format_range_unified(start: usize, stop: usize) -> String {
    let mut beginning = start + 1;
    let length = stop - start;
    if length == 1 {
        return beginning.to_string();
    }
    if length == 0 {
        beginning -= 1;
    }
    format!("{},{}", beginning, length)
}

/// Render the differences between `a` and `b` as a unified diff.
pub fn unified_diff<S: AsRef<str>>(a: &[S], b: &[S], options: &DiffOptions) -> Vec<String> {
    log_op_start!("unified_diff", a_len = a.len(), b_len = b.len(), n = options.n);
    let start = Instant::now();

    let a: Vec<&str> = a.iter().map(AsRef::as_ref).collect();
    let b: Vec<&str> = b.iter().map(AsRef::as_ref).collect();
    let lineterm = &options.lineterm;

    let mut lines = Vec::new();
    let groups = hunks(&a, &b, options.n);
    for (idx, group) in groups.iter().enumerate() {
        if idx == 0 {
            lines.push(format!("--- {}{}", options.from_header(), lineterm));
            lines.push(format!("+++ {}{}", options.to_header(), lineterm));
        }
        let ((a1, a2), (b1, b2)) = hunk_span(group);
        lines.push(format!(
            "@@ -{} +{} @@{}",
            format_range_unified(a1, a2),
            format_range_unified(b1, b2),
            lineterm
        ));
        for code in group {
            if code.tag == Tag::Equal {
                lines.extend(a[code.a_range()].iter().map(|line| format!(" {}", line)));
                continue;
            }
            if matches!(code.tag, Tag::Replace | Tag::Delete) {
                lines.extend(a[code.a_range()].iter().map(|line| format!("-{}", line)));
            }
            if matches!(code.tag, Tag::Replace | Tag::Insert) {
                lines.extend(b[code.b_range()].iter().map(|line| format!("+{}", line)));
            }
        }
    }

    log_op_end!(
        "unified_diff",
        duration_ms = start.elapsed().as_millis() as u64,
        hunks = groups.len(),
        lines = lines.len()
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_range_unified() {
        assert_eq!(format_range_unified(3, 4), "4");
        assert_eq!(format_range_unified(3, 6), "4,3");
        assert_eq!(format_range_unified(3, 3), "3,0");
        assert_eq!(format_range_unified(0, 0), "0,0");
    }

    #[test]
    fn test_lineterm_applies_to_headers_only() {
        let a = ["one", "two"];
        let b = ["one", "three"];
        let options = DiffOptions::default().with_lineterm("");
        assert_eq!(
            unified_diff(&a, &b, &options),
            vec!["--- ", "+++ ", "@@ -1,2 +1,2 @@", " one", "-two", "+three"]
        );
    }
}
