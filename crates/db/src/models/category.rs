//! Category entity model and DTO.

use catalog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Serialization-facing projection of a [`Category`].
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDto {
    pub id: DbId,
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(entity: Category) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
