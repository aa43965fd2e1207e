//! Splitting text into lines for line-level comparison.

use crate::errors::{DiffError, Result};
use crate::{log_op_end, log_op_error, log_op_start};
use std::path::Path;
use std::time::Instant;

/// Split `text` into lines, keeping each line's terminator.
///
/// A final line without a terminator is kept as is; empty text has no lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

/// Read a UTF-8 file as lines with their terminators.
///
/// # Errors
///
/// [`DiffError::Io`] when the file cannot be read or is not UTF-8.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    log_op_start!("read_lines", path = %path.display());
    let start = Instant::now();

    match std::fs::read_to_string(path) {
        Ok(text) => {
            let lines = split_lines(&text);
            log_op_end!(
                "read_lines",
                duration_ms = start.elapsed().as_millis() as u64,
                lines = lines.len()
            );
            Ok(lines)
        }
        Err(e) => {
            let err = DiffError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            };
            log_op_error!(
                "read_lines",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_keeps_terminators() {
        assert_eq!(split_lines("a\nb\r\nc"), vec!["a\n", "b\r\n", "c"]);
        assert_eq!(split_lines("a\n\n"), vec!["a\n", "\n"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read_lines("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, DiffError::Io { ref path, .. } if path == "/definitely/not/here.txt"));
    }
}
