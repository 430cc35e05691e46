//! Handlers for note CRUD and the favorite toggle.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use kb_core::error::CoreError;
use kb_core::notes::{validate_note_content, validate_note_title};
use kb_core::search::category_filter;
use kb_core::summary::{generate_summary, DEFAULT_SUMMARY_LENGTH};
use kb_core::types::DbId;
use kb_db::models::note::CreateNote;
use kb_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::response::{FavoriteResponse, MessageResponse, NoteList};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for listing notes.
#[derive(Debug, serde::Deserialize)]
pub struct ListNotesParams {
    pub category: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for listing favorites.
#[derive(Debug, serde::Deserialize)]
pub struct PageParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Validate a note payload and fill in a derived summary when the caller
/// supplied none (or a blank one) but content is present.
fn prepare_note(input: &mut CreateNote) -> Result<(), AppError> {
    validate_note_title(&input.title).map_err(AppError::BadRequest)?;
    validate_note_content(&input.content).map_err(AppError::BadRequest)?;

    let missing_summary = input.summary.as_deref().map_or(true, str::is_empty);
    if missing_summary && !input.content.is_empty() {
        input.summary = Some(generate_summary(&input.content, DEFAULT_SUMMARY_LENGTH));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/notes
///
/// Create a new note, deriving the summary when none is supplied.
pub async fn create_note(
    State(state): State<AppState>,
    Json(mut input): Json<CreateNote>,
) -> AppResult<impl IntoResponse> {
    prepare_note(&mut input)?;

    let note = NoteRepo::create(&state.pool, &input).await?;

    tracing::info!(note_id = note.id, category = %note.category, "Note created");

    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /api/notes?category=&skip=&limit=
///
/// List notes, most recently updated first. `category=all` (or absent)
/// disables the filter.
pub async fn list_notes(
    State(state): State<AppState>,
    Query(params): Query<ListNotesParams>,
) -> AppResult<impl IntoResponse> {
    let category = category_filter(params.category.as_deref());
    let notes = NoteRepo::list(&state.pool, category, params.limit, params.skip).await?;
    Ok(Json(NoteList::from(notes)))
}

/// GET /api/notes/favorites?skip=&limit=
pub async fn list_favorites(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let notes = NoteRepo::list_favorites(&state.pool, params.limit, params.skip).await?;
    Ok(Json(NoteList::from(notes)))
}

/// GET /api/notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let note = NoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Note", id })?;

    Ok(Json(note))
}

/// PUT /api/notes/{id}
///
/// Replace a note's fields, deriving the summary when none is supplied.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<CreateNote>,
) -> AppResult<impl IntoResponse> {
    prepare_note(&mut input)?;

    let note = NoteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Note", id })?;

    tracing::info!(note_id = id, "Note updated");

    Ok(Json(note))
}

/// DELETE /api/notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = NoteRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(CoreError::NotFound { entity: "Note", id }.into());
    }

    tracing::info!(note_id = id, "Note deleted");

    Ok(Json(MessageResponse {
        message: "Note deleted successfully",
    }))
}

/// POST /api/notes/{id}/favorite
///
/// Toggle the favorite flag.
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let note = NoteRepo::toggle_favorite(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Note", id })?;

    tracing::info!(note_id = id, is_favorite = note.is_favorite, "Favorite toggled");

    Ok(Json(FavoriteResponse {
        message: "Favorite status updated",
        is_favorite: note.is_favorite,
    }))
}
