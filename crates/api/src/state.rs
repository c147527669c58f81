use std::sync::Arc;

use catalog_db::repositories::{PgCategoryRepository, PgProductRepository};
use catalog_db::DbPool;

use crate::config::ServerConfig;
use crate::services::{CategoryService, ProductService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used directly by the health check).
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Product use cases over the PostgreSQL repositories.
    pub products: ProductService<PgProductRepository, PgCategoryRepository>,
    /// Category use cases over the PostgreSQL repository.
    pub categories: CategoryService<PgCategoryRepository>,
}

impl AppState {
    /// Wire repositories and services onto a pool at composition time.
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        let product_repo = Arc::new(PgProductRepository::new(pool.clone()));
        let category_repo = Arc::new(PgCategoryRepository::new(pool.clone()));

        Self {
            products: ProductService::new(product_repo, Arc::clone(&category_repo)),
            categories: CategoryService::new(category_repo),
            pool,
            config: Arc::new(config),
        }
    }
}
