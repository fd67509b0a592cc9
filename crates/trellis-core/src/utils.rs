//! Small text helpers used when rendering trees, sets and traces.

use std::fmt::Display;

use indexmap::IndexMap;

/// Join displayable items with a separator.
///
/// # Examples
/// ```
/// use trellis_core::utils::join;
/// assert_eq!(join(["a", "b", "c"], ", "), "a, b, c");
/// assert_eq!(join(Vec::<u32>::new(), ", "), "");
/// ```
pub fn join<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut result = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            result.push_str(separator);
        }
        result.push_str(&item.to_string());
    }
    result
}

/// Render items as a bracketed, comma-separated list: `[a, b]`.
pub fn array_to_string<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format!("[{}]", join(items, ", "))
}

/// Make control whitespace visible.
///
/// Newlines, carriage returns and tabs become their backslash escapes.
/// With `escape_spaces`, plain spaces become a middle dot (`·`).
pub fn escape_whitespace(s: &str, escape_spaces: bool) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            ' ' if escape_spaces => result.push('\u{00B7}'),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            _ => result.push(c),
        }
    }
    result
}

/// Lowercase hex rendering. Negative values use their two's complement bits.
pub fn to_hex_string(value: i32) -> String {
    format!("{:x}", value as u32)
}

/// Build a string from raw code points, skipping values that are not valid
/// Unicode scalars.
pub fn to_char_string(code_points: &[u32]) -> String {
    code_points.iter().filter_map(|&cp| char::from_u32(cp)).collect()
}

/// Map each key to the index of its first occurrence, preserving key order.
///
/// Used to turn rule and token name tables into name → index lookups.
pub fn to_map<S: AsRef<str>>(keys: &[S]) -> IndexMap<String, usize> {
    let mut map = IndexMap::with_capacity(keys.len());
    for (i, key) in keys.iter().enumerate() {
        map.entry(key.as_ref().to_owned()).or_insert(i);
    }
    map
}
