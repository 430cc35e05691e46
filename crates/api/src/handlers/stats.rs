//! Dashboard statistics.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use kb_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
///
/// Total notes, total categories, favorited notes, and notes created in
/// the trailing 7 days.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = StatsRepo::get(&state.pool).await?;
    Ok(Json(stats))
}
