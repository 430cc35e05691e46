//! Category model.

use kb_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub created_at: Timestamp,
}

/// DTO for creating a category. Also the full-replacement payload for
/// updates.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    kb_core::notes::DEFAULT_CATEGORY_COLOR.to_string()
}
