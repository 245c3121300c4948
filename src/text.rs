//! Shared normalisation for optional free-text fields.

/// Drops values that are empty or whitespace-only.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
