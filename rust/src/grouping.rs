//! Separator insertion at fixed intervals.
//!
//! Indices count characters, so multi-byte alphabets group correctly.

/// Separator placed between groups.
pub const SEPARATOR: char = '-';

/// Insert [`SEPARATOR`] before every character whose index is a positive
/// multiple of `group_size`. Existing separators are kept as ordinary
/// characters; see [`regroup`] for the stripping variant.
pub fn group(s: &str, group_size: usize) -> String {
    if group_size == 0 || group_size >= s.chars().count() {
        return s.to_string();
    }

    let mut grouped = String::with_capacity(s.len() + s.len() / group_size);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && i % group_size == 0 {
            grouped.push(SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}

/// Remove every [`SEPARATOR`].
pub fn strip_separators(s: &str) -> String {
    s.chars().filter(|&c| c != SEPARATOR).collect()
}

/// Group an already-separated string from scratch.
///
/// The size check runs against the input as given, so a string that is
/// shorter than `group_size` keeps its existing separators.
pub fn regroup(s: &str, group_size: usize) -> String {
    if group_size == 0 || group_size >= s.chars().count() {
        return s.to_string();
    }
    group(&strip_separators(s), group_size)
}
