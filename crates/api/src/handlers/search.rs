//! Free-text note search.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use kb_core::search::{category_filter, search_terms, split_tags};
use kb_db::models::note::NoteSearch;
use kb_db::repositories::NoteRepo;

use crate::error::AppResult;
use crate::response::SearchResult;
use crate::state::AppState;

/// Query parameters for note search.
#[derive(Debug, serde::Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub category: Option<String>,
    /// Comma-separated tag filters.
    pub tags: Option<String>,
}

/// GET /api/search?q=&category=&tags=
///
/// Every term must match somewhere in title, content, summary, or tags;
/// a blank query returns an empty result without touching the store.
pub async fn search_notes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let terms = search_terms(&params.q);
    if terms.is_empty() {
        return Ok(Json(SearchResult {
            notes: Vec::new(),
            total: 0,
            query: params.q,
        }));
    }

    let tags = params.tags.as_deref().map(split_tags).unwrap_or_default();

    let search = NoteSearch {
        terms: &terms,
        category: category_filter(params.category.as_deref()),
        tags: &tags,
    };

    let notes = NoteRepo::search(&state.pool, &search).await?;

    Ok(Json(SearchResult {
        total: notes.len(),
        notes,
        query: params.q,
    }))
}
