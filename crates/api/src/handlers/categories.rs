//! Handlers for category CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use kb_core::error::CoreError;
use kb_core::notes::{validate_category_color, validate_category_name};
use kb_core::types::DbId;
use kb_db::models::category::CreateCategory;
use kb_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::response::{CategoryList, MessageResponse};
use crate::state::AppState;

fn validate_category(input: &CreateCategory) -> Result<(), AppError> {
    validate_category_name(&input.name).map_err(AppError::BadRequest)?;
    validate_category_color(&input.color).map_err(AppError::BadRequest)?;
    Ok(())
}

/// POST /api/categories
///
/// Create a new category. The name must be unique; the store is never
/// mutated when the name already exists.
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    validate_category(&input)?;

    if CategoryRepo::find_by_name(&state.pool, &input.name)
        .await?
        .is_some()
    {
        return Err(CoreError::Conflict("Category name already exists".to_string()).into());
    }

    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/categories
///
/// List all categories, alphabetical by name.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(CategoryList::from(categories)))
}

/// PUT /api/categories/{id}
///
/// Replace a category's fields. Notes referencing the old name keep it;
/// the label is decoupled from the category table.
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    validate_category(&input)?;

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Category",
            id,
        })?;

    tracing::info!(category_id = id, "Category updated");

    Ok(Json(category))
}

/// DELETE /api/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Category",
            id,
        }
        .into());
    }

    tracing::info!(category_id = id, "Category deleted");

    Ok(Json(MessageResponse {
        message: "Category deleted successfully",
    }))
}
