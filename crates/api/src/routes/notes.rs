//! Route definitions for notes. Mounted at `/notes` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes.
///
/// ```text
/// GET    /                   -> list_notes (?category, skip, limit)
/// POST   /                   -> create_note
/// GET    /favorites          -> list_favorites (?skip, limit)
/// GET    /{id}               -> get_note
/// PUT    /{id}               -> update_note
/// DELETE /{id}               -> delete_note
/// POST   /{id}/favorite      -> toggle_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list_notes).post(notes::create_note))
        .route("/favorites", get(notes::list_favorites))
        .route(
            "/{id}",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        .route("/{id}/favorite", post(notes::toggle_favorite))
}
