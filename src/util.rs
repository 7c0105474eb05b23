//! Shared utility helpers.

/// Case-insensitive starts_with check without allocating.
#[inline]
pub fn starts_with_ci(haystack: &str, needle: &str) -> bool {
    haystack.len() >= needle.len()
        && haystack.as_bytes()[..needle.len()].eq_ignore_ascii_case(needle.as_bytes())
}

/// Case-insensitive membership test over a name list.
#[inline]
pub fn list_contains_ci(haystack: &[String], needle: &str) -> bool {
    haystack.iter().any(|item| item.eq_ignore_ascii_case(needle))
}
