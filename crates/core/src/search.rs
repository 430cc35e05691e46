//! Search and pagination helpers.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the repository layer and any future CLI tooling.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Sentinel category value meaning "no category restriction".
pub const CATEGORY_ALL: &str = "all";

/// Default number of notes per listing page.
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Maximum number of notes per listing page.
pub const MAX_PAGE_LIMIT: i64 = 500;

// ---------------------------------------------------------------------------
// Query helpers
// ---------------------------------------------------------------------------

/// Split user input into lowercased search terms.
///
/// Whitespace-separated, empty input yields an empty list. Every term must
/// match in at least one searchable field (AND across terms, OR across
/// fields), so the caller should skip the store round trip entirely when
/// this returns no terms.
///
/// # Examples
///
/// ```
/// use kb_core::search::search_terms;
/// assert_eq!(search_terms("Rust Async"), vec!["rust", "async"]);
/// assert!(search_terms("   ").is_empty());
/// ```
pub fn search_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Normalize a category filter, treating `"all"` and blank as no filter.
pub fn category_filter(category: Option<&str>) -> Option<&str> {
    match category {
        Some(c) if !c.is_empty() && c != CATEGORY_ALL => Some(c),
        _ => None,
    }
}

/// Split a comma-separated tag string into trimmed, non-empty tags.
///
/// # Examples
///
/// ```
/// use kb_core::search::split_tags;
/// assert_eq!(split_tags("rust, web , "), vec!["rust", "web"]);
/// ```
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
