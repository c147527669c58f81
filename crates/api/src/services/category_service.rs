//! Category use cases. Read-only: nothing in this slice depends on
//! categories being created or deleted.

use std::sync::Arc;

use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::category::CategoryDto;
use catalog_db::repositories::CategoryRepository;
use catalog_db::DbError;

/// Mediates between the API boundary and the store for category resources.
pub struct CategoryService<C> {
    repository: Arc<C>,
}

impl<C> Clone for CategoryService<C> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<C: CategoryRepository> CategoryService<C> {
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    /// List all categories as DTOs (unpaged full scan).
    pub async fn find_all(&self) -> Result<Vec<CategoryDto>, CoreError> {
        let categories = self.repository.list().await.map_err(fatal)?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    /// Look up a category by id.
    pub async fn find_by_id(&self, id: DbId) -> Result<CategoryDto, CoreError> {
        let category = self
            .repository
            .find_by_id(id)
            .await
            .map_err(fatal)?
            .ok_or(CoreError::NotFound {
                entity: "Category",
                id,
            })?;
        Ok(CategoryDto::from(category))
    }
}

fn fatal(err: DbError) -> CoreError {
    CoreError::Internal(err.to_string())
}
