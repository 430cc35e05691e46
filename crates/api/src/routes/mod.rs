pub mod categories;
pub mod health;
pub mod notes;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /stats                       GET    usage statistics
/// /search                      GET    free-text note search (?q, category, tags)
/// /notes                       GET, POST
/// /notes/favorites             GET
/// /notes/{id}                  GET, PUT, DELETE
/// /notes/{id}/favorite         POST
/// /categories                  GET, POST
/// /categories/{id}             PUT, DELETE
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(handlers::stats::get_stats))
        .route("/search", get(handlers::search::search_notes))
        .nest("/notes", notes::router())
        .nest("/categories", categories::router())
}
