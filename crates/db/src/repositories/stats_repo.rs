//! Aggregate statistics queries.

use chrono::{Duration, Utc};

use crate::models::stats::Stats;
use crate::DbPool;

/// Provides the dashboard count queries.
pub struct StatsRepo;

impl StatsRepo {
    /// Compute the four dashboard counts. The recent-notes window is the
    /// trailing 7 days, evaluated at call time.
    pub async fn get(pool: &DbPool) -> Result<Stats, sqlx::Error> {
        let total_notes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes")
            .fetch_one(pool)
            .await?;

        let total_categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(pool)
            .await?;

        let favorite_notes: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM notes WHERE is_favorite = TRUE")
                .fetch_one(pool)
                .await?;

        let week_ago = Utc::now() - Duration::days(7);
        let recent_notes: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM notes WHERE created_at >= $1")
                .bind(week_ago)
                .fetch_one(pool)
                .await?;

        Ok(Stats {
            total_notes,
            total_categories,
            favorite_notes,
            recent_notes,
        })
    }
}
