//! Case-insensitive comparison helpers shared by the value objects.

use std::hash::{Hash, Hasher};

/// Compares two strings ignoring case, without allocating.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Hashes a string so that values equal under [`eq_ignore_case`] hash alike.
pub(crate) fn hash_ignore_case<H: Hasher>(value: &str, state: &mut H) {
    for c in value.chars().flat_map(char::to_lowercase) {
        c.hash(state);
    }
    // Field terminator so ("ab", "c") and ("a", "bc") differ.
    0xffu8.hash(state);
}

/// Returns true if `needle` occurs in `haystack`, ignoring case.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
