/// Lines `prefix0\n` .. `prefix{n-1}\n`.
#[allow(dead_code)]
pub fn numbered_lines(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{}{}\n", prefix, i)).collect()
}

/// Terminate every line with `\n`.
#[allow(dead_code)]
pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| format!("{}\n", s)).collect()
}
