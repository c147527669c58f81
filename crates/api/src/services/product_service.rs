//! Product use cases.
//!
//! Every operation runs against the injected repositories and returns
//! [`CoreError`] kinds: lookups that miss become `NotFound`, writes
//! rejected by a referential constraint become `Database`, and any other
//! store failure surfaces as `Internal` (fatal for the request).

use std::sync::Arc;

use catalog_core::error::CoreError;
use catalog_core::pagination::{Page, PageRequest, SortDirection};
use catalog_core::types::DbId;
use catalog_core::validate::{validate_product_name, validate_product_price};
use catalog_db::models::product::{CreateProduct, ProductDto, ProductSort, UpdateProduct};
use catalog_db::repositories::{CategoryRepository, ProductRepository};
use catalog_db::DbError;

/// Mediates between the API boundary and the store for product resources.
pub struct ProductService<P, C> {
    products: Arc<P>,
    categories: Arc<C>,
}

impl<P, C> Clone for ProductService<P, C> {
    fn clone(&self) -> Self {
        Self {
            products: Arc::clone(&self.products),
            categories: Arc::clone(&self.categories),
        }
    }
}

impl<P: ProductRepository, C: CategoryRepository> ProductService<P, C> {
    pub fn new(products: Arc<P>, categories: Arc<C>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Look up a product and assemble its detail DTO with resolved
    /// categories.
    pub async fn find_by_id(&self, id: DbId) -> Result<ProductDto, CoreError> {
        let product = self
            .products
            .find_by_id(id)
            .await
            .map_err(fatal)?
            .ok_or(not_found(id))?;

        let categories = self.products.categories_of(id).await.map_err(fatal)?;
        Ok(ProductDto::with_categories(product, categories))
    }

    /// Fetch one page of products as list DTOs.
    ///
    /// Pagination and sorting are delegated entirely to the store; entity
    /// order and page metadata pass through unchanged.
    pub async fn find_all_paged(
        &self,
        request: &PageRequest,
        sort: ProductSort,
        dir: SortDirection,
    ) -> Result<Page<ProductDto>, CoreError> {
        let page = self
            .products
            .page(request, sort, dir)
            .await
            .map_err(fatal)?;
        Ok(page.map(ProductDto::from))
    }

    /// Create a product, resolving every referenced category first.
    ///
    /// The store's foreign key would also catch a missing category, but
    /// the explicit check reports it as the domain `NotFound` kind.
    pub async fn insert(&self, input: CreateProduct) -> Result<ProductDto, CoreError> {
        validate_scalars(&input.name, input.price)?;
        self.check_categories(&input.category_ids).await?;

        let product = self.products.insert(&input).await.map_err(write_error)?;

        let categories = self
            .products
            .categories_of(product.id)
            .await
            .map_err(fatal)?;
        Ok(ProductDto::with_categories(product, categories))
    }

    /// Overwrite a product's scalar fields and replace its category set
    /// wholesale.
    ///
    /// Existence is checked up front, before any mutation; a store-level
    /// missing-row signal from the update itself is still translated and
    /// never leaks.
    pub async fn update(&self, id: DbId, input: UpdateProduct) -> Result<ProductDto, CoreError> {
        validate_scalars(&input.name, input.price)?;

        if !self.products.exists(id).await.map_err(fatal)? {
            return Err(not_found(id));
        }
        self.check_categories(&input.category_ids).await?;

        let product = self
            .products
            .update(id, &input)
            .await
            .map_err(|err| match err {
                DbError::RowNotFound => not_found(id),
                other => write_error(other),
            })?;

        let categories = self.products.categories_of(id).await.map_err(fatal)?;
        Ok(ProductDto::with_categories(product, categories))
    }

    /// Delete a product.
    ///
    /// A missing id fails with `NotFound` without invoking the store
    /// delete; a delete blocked by a dependent reference fails with
    /// `Database`.
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        if !self.products.exists(id).await.map_err(fatal)? {
            return Err(not_found(id));
        }

        self.products.delete(id).await.map_err(|err| match err {
            DbError::RowNotFound => not_found(id),
            DbError::IntegrityViolation(constraint) => {
                tracing::warn!(product_id = id, %constraint, "Delete blocked by dependent reference");
                CoreError::Database(format!("Product {id} is referenced by other records"))
            }
            other => fatal(other),
        })
    }

    /// Fail with `NotFound` on the first referenced category id that does
    /// not exist.
    async fn check_categories(&self, category_ids: &[DbId]) -> Result<(), CoreError> {
        for &id in category_ids {
            if !self.categories.exists(id).await.map_err(fatal)? {
                return Err(CoreError::NotFound {
                    entity: "Category",
                    id,
                });
            }
        }
        Ok(())
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: "Product",
        id,
    }
}

fn fatal(err: DbError) -> CoreError {
    CoreError::Internal(err.to_string())
}

fn write_error(err: DbError) -> CoreError {
    match err {
        DbError::IntegrityViolation(constraint) => {
            CoreError::Database(format!("Write rejected by constraint {constraint}"))
        }
        other => fatal(other),
    }
}

fn validate_scalars(name: &str, price: f64) -> Result<(), CoreError> {
    validate_product_name(name).map_err(CoreError::Validation)?;
    validate_product_price(price).map_err(CoreError::Validation)?;
    Ok(())
}
