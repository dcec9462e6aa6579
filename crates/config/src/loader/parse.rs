//! Line parsing for env files.
//!
//! Responsibilities:
//! - Turn one line of an env file into a `(key, value)` pair.
//!
//! Does NOT handle:
//! - Reading the file or deciding what to do with skipped lines (see `store.rs`).
//!
//! Invariants:
//! - Everything from the first `#` is discarded before splitting.
//! - Only the first `=` splits; later `=` characters stay in the value.
//! - The key is upper-cased; key and value are trimmed independently.
//! - A line without `=` yields `("", "")`, which callers treat as "skip".

/// Parse a single env-file line into `(key, value)`.
///
/// Returns a pair of empty strings when the line has no `=` after comment
/// removal. A line like `=value` returns an empty key with a non-empty value;
/// callers skip on an empty key either way.
pub fn parse_line(line: &str) -> (String, String) {
    let line = strip_comment(line);
    match line.split_once('=') {
        Some((key, value)) => (
            key.to_uppercase().trim().to_string(),
            value.trim().to_string(),
        ),
        None => (String::new(), String::new()),
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}
