//! Depth-aware splitting of composite CSS values.
//!
//! CSS values nest: `rgba(0, 0, 0, 0.5)` contains commas that do not separate
//! shadow layers, and `1px solid rgba(0, 0, 0, 0.5)` contains spaces that do
//! not separate border components. Every reducer that splits a composite value
//! goes through these two functions.

/// Splits `value` on `sep` wherever the bracket depth is zero.
///
/// Parentheses and square brackets both count as nesting. Parts are trimmed
/// and empty parts are dropped.
///
/// ```rust
/// use okcss::css::split_top_level;
///
/// let layers = split_top_level("0 1px rgba(0,0,0,0.2), inset 0 0 2px #fff", ',');
/// assert_eq!(layers, vec!["0 1px rgba(0,0,0,0.2)", "inset 0 0 2px #fff"]);
/// ```
pub fn split_top_level(value: &str, sep: char) -> Vec<&str> {
    split_at_depth_zero(value, |ch| ch == sep)
}

/// Splits `value` on whitespace wherever the bracket depth is zero.
///
/// Runs of whitespace count as a single separator.
pub fn split_spaces(value: &str) -> Vec<&str> {
    split_at_depth_zero(value, char::is_whitespace)
}

fn split_at_depth_zero(value: &str, is_sep: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (idx, ch) in value.char_indices() {
        match ch {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            _ if depth == 0 && is_sep(ch) => {
                push_trimmed(&mut parts, &value[start..idx]);
                start = idx + ch.len_utf8();
            }
            _ => {}
        }
    }
    push_trimmed(&mut parts, &value[start..]);

    parts
}

fn push_trimmed<'a>(parts: &mut Vec<&'a str>, part: &'a str) {
    let part = part.trim();
    if !part.is_empty() {
        parts.push(part);
    }
}
