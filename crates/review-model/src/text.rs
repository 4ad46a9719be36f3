//! Case-insensitive matching shared by the review filters and the search
//! lookup.

/// Trim and lower-case a user query. An empty result means "no query".
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Substring test against an already-normalized needle.
///
/// An empty needle matches everything.
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

/// True if any of `fields` contains the normalized needle.
pub fn any_contains<'a>(fields: impl IntoIterator<Item = &'a str>, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    fields.into_iter().any(|field| contains_normalized(field, needle))
}
