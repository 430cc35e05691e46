//! Knowledge base usage statistics.

use serde::Serialize;

/// Aggregate counts for the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub total_notes: i64,
    pub total_categories: i64,
    pub favorite_notes: i64,
    /// Notes created within the trailing 7-day window.
    pub recent_notes: i64,
}
