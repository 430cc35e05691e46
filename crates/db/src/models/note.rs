//! Note model.

use kb_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub category: String,
    /// Comma-separated tag labels.
    pub tags: Option<String>,
    pub is_favorite: bool,
    pub is_public: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a note. Also the full-replacement payload for updates:
/// every field here overwrites the stored row (identity and `created_at`
/// are never touched).
#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    pub tags: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_public: bool,
}

fn default_category() -> String {
    kb_core::notes::DEFAULT_NOTE_CATEGORY.to_string()
}

/// Filters for note search.
#[derive(Debug)]
pub struct NoteSearch<'a> {
    /// Lowercased whitespace-split terms; must be non-empty.
    pub terms: &'a [String],
    /// Exact-match category, already normalized (no `"all"` sentinel).
    pub category: Option<&'a str>,
    /// Trimmed tag filters; any one matching suffices.
    pub tags: &'a [String],
}
