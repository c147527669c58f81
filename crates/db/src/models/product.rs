//! Product entity model, DTOs, and sort keys.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::category::{Category, CategoryDto};

/// A row from the `products` table.
///
/// The category association lives in the `product_categories` join table
/// and is loaded separately by the repository.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: String,
    pub date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Serialization-facing projection of a [`Product`].
///
/// List projections leave `categories` empty; the detail projection
/// carries the resolved association.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDto {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: String,
    pub date: Timestamp,
    pub categories: Vec<CategoryDto>,
}

impl ProductDto {
    /// Build a detail projection with the resolved category set.
    pub fn with_categories(entity: Product, categories: Vec<Category>) -> Self {
        let mut dto = Self::from(entity);
        dto.categories = categories.into_iter().map(CategoryDto::from).collect();
        dto
    }
}

impl From<Product> for ProductDto {
    /// Build a list projection; the category set is left empty.
    fn from(entity: Product) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            img_url: entity.img_url,
            date: entity.date,
            categories: Vec::new(),
        }
    }
}

/// Input DTO for creating a product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: String,
    pub date: Timestamp,
    /// Ids of the categories to associate. Duplicates are ignored.
    #[serde(default)]
    pub category_ids: Vec<DbId>,
}

/// Input DTO for updating a product.
///
/// Updates are wholesale overwrites: every scalar field is required and
/// the category association set is replaced, not merged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub img_url: String,
    pub date: Timestamp,
    #[serde(default)]
    pub category_ids: Vec<DbId>,
}

/// Whitelisted sort keys for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    #[default]
    Id,
    Name,
    Price,
    Date,
}

impl ProductSort {
    /// Column name used in ORDER BY clauses.
    pub fn column(&self) -> &'static str {
        match self {
            ProductSort::Id => "id",
            ProductSort::Name => "name",
            ProductSort::Price => "price",
            ProductSort::Date => "date",
        }
    }

    /// Parse a client-supplied sort field, `None` for unknown fields.
    pub fn parse(field: &str) -> Option<Self> {
        match field {
            "id" => Some(ProductSort::Id),
            "name" => Some(ProductSort::Name),
            "price" => Some(ProductSort::Price),
            "date" => Some(ProductSort::Date),
            _ => None,
        }
    }
}
