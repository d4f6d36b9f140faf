//! Shared utility functions.

/// Shorten `s` to at most `max_chars` Unicode scalar values, replacing the
/// tail with `…` when anything was cut.
///
/// The result of a cut is exactly `max_chars` characters long, ellipsis
/// included.
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
