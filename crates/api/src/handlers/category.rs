//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::Json;
use catalog_core::types::DbId;
use catalog_db::models::category::CategoryDto;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CategoryDto>>> {
    let categories = state.categories.find_all().await?;
    Ok(Json(categories))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CategoryDto>> {
    let category = state.categories.find_by_id(id).await?;
    Ok(Json(category))
}
