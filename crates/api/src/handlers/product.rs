//! Handlers for the `/products` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::pagination::Page;
use catalog_core::types::DbId;
use catalog_db::models::product::{CreateProduct, ProductDto, UpdateProduct};

use crate::error::AppResult;
use crate::query::PageQuery;
use crate::state::AppState;

/// GET /api/v1/products
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> AppResult<Json<Page<ProductDto>>> {
    let (sort, dir) = params.sort()?;
    let page = state
        .products
        .find_all_paged(&params.page_request(), sort, dir)
        .await?;
    Ok(Json(page))
}

/// GET /api/v1/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProductDto>> {
    let product = state.products.find_by_id(id).await?;
    Ok(Json(product))
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<ProductDto>)> {
    let product = state.products.insert(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/v1/products/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<ProductDto>> {
    let product = state.products.update(id, input).await?;
    Ok(Json(product))
}

/// DELETE /api/v1/products/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
