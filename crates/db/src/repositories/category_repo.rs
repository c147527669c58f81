//! Repository for the `categories` table.

use async_trait::async_trait;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::category::Category;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Store contract for categories. Read-only in this slice.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List all categories ordered by name.
    async fn list(&self) -> DbResult<Vec<Category>>;

    /// Find a category by its internal ID.
    async fn find_by_id(&self, id: DbId) -> DbResult<Option<Category>>;

    /// Check whether a category with the given ID exists.
    async fn exists(&self, id: DbId) -> DbResult<bool>;
}

/// PostgreSQL implementation of [`CategoryRepository`].
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list(&self) -> DbResult<Vec<Category>> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name ASC");
        let categories = sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(categories)
    }

    async fn find_by_id(&self, id: DbId) -> DbResult<Option<Category>> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(category)
    }

    async fn exists(&self, id: DbId) -> DbResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}
