//! Formatting utilities used for CLI output.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// First `len` characters of a commit hash; `0` keeps the whole hash.
pub fn short_hash(hash: &str, len: usize) -> &str {
    if len == 0 {
        return hash;
    }
    hash.get(..len).unwrap_or(hash)
}
