pub mod category;
pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /products           GET (paged list), POST
/// /products/{id}      GET, PUT, DELETE
/// /categories         GET
/// /categories/{id}    GET
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product::router())
        .nest("/categories", category::router())
}
