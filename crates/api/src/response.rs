//! Shared response envelope types for API handlers.
//!
//! List endpoints return `{ "<plural>": [...], "total": n }` envelopes and
//! mutations that do not return an entity use [`MessageResponse`]. Using
//! typed structs instead of ad-hoc `serde_json::json!` gives compile-time
//! safety and consistent serialization.

use kb_db::models::category::Category;
use kb_db::models::note::Note;
use serde::Serialize;

/// `{ "notes": [...], "total": n }`
#[derive(Debug, Serialize)]
pub struct NoteList {
    pub notes: Vec<Note>,
    pub total: usize,
}

impl From<Vec<Note>> for NoteList {
    fn from(notes: Vec<Note>) -> Self {
        let total = notes.len();
        Self { notes, total }
    }
}

/// `{ "categories": [...], "total": n }`
#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub categories: Vec<Category>,
    pub total: usize,
}

impl From<Vec<Category>> for CategoryList {
    fn from(categories: Vec<Category>) -> Self {
        let total = categories.len();
        Self { categories, total }
    }
}

/// Search results, echoing the query back to the client.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub notes: Vec<Note>,
    pub total: usize,
    pub query: String,
}

/// `{ "message": "..." }` acknowledgement for deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Acknowledgement for the favorite toggle, carrying the new flag value.
#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub message: &'static str,
    pub is_favorite: bool,
}
