//! Repository for the `products` table and its category association.

use async_trait::async_trait;
use catalog_core::pagination::{Page, PageRequest, SortDirection};
use catalog_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::DbResult;
use crate::models::category::Category;
use crate::models::product::{CreateProduct, Product, ProductSort, UpdateProduct};
use crate::DbError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, img_url, date, created_at, updated_at";

/// Store contract for products.
///
/// Implementations surface the two distinguishable failure signals of
/// [`DbError`]; they perform no existence pre-checks or domain error
/// translation, which belong to the service layer.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by its internal ID.
    async fn find_by_id(&self, id: DbId) -> DbResult<Option<Product>>;

    /// Load the category association set, ordered by category name.
    async fn categories_of(&self, id: DbId) -> DbResult<Vec<Category>>;

    /// Fetch one page of products plus the total row count.
    async fn page(
        &self,
        request: &PageRequest,
        sort: ProductSort,
        dir: SortDirection,
    ) -> DbResult<Page<Product>>;

    /// Check whether a product with the given ID exists.
    async fn exists(&self, id: DbId) -> DbResult<bool>;

    /// Insert a new product and its association rows atomically.
    async fn insert(&self, input: &CreateProduct) -> DbResult<Product>;

    /// Overwrite a product's scalar fields and replace its association
    /// set wholesale. Fails with [`DbError::RowNotFound`] if the ID is
    /// absent.
    async fn update(&self, id: DbId, input: &UpdateProduct) -> DbResult<Product>;

    /// Delete a product by ID.
    ///
    /// Fails with [`DbError::RowNotFound`] if the ID is absent and with
    /// [`DbError::IntegrityViolation`] if a dependent row blocks the
    /// delete.
    async fn delete(&self, id: DbId) -> DbResult<()>;
}

/// PostgreSQL implementation of [`ProductRepository`].
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Replace the association rows for a product inside a transaction.
    ///
    /// Clear-then-re-add; duplicate ids in the input collapse via
    /// ON CONFLICT, keeping the set unique per the entity invariant.
    async fn replace_categories(
        tx: &mut Transaction<'_, Postgres>,
        product_id: DbId,
        category_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM product_categories WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut **tx)
            .await?;

        for category_id in category_ids {
            sqlx::query(
                "INSERT INTO product_categories (product_id, category_id)
                 VALUES ($1, $2)
                 ON CONFLICT DO NOTHING",
            )
            .bind(product_id)
            .bind(category_id)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: DbId) -> DbResult<Option<Product>> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    async fn categories_of(&self, id: DbId) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT c.id, c.name, c.created_at, c.updated_at
             FROM categories c
             JOIN product_categories pc ON pc.category_id = c.id
             WHERE pc.product_id = $1
             ORDER BY c.name ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    async fn page(
        &self,
        request: &PageRequest,
        sort: ProductSort,
        dir: SortDirection,
    ) -> DbResult<Page<Product>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM products
             ORDER BY {} {}
             LIMIT $1 OFFSET $2",
            sort.column(),
            dir.as_sql()
        );
        let products = sqlx::query_as::<_, Product>(&query)
            .bind(request.size)
            .bind(request.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(Page::new(products, request, total))
    }

    async fn exists(&self, id: DbId) -> DbResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn insert(&self, input: &CreateProduct) -> DbResult<Product> {
        let mut tx = self.pool.begin().await.map_err(DbError::from)?;

        let query = format!(
            "INSERT INTO products (name, description, price, img_url, date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.img_url)
            .bind(input.date)
            .fetch_one(&mut *tx)
            .await?;

        Self::replace_categories(&mut tx, product.id, &input.category_ids).await?;

        tx.commit().await.map_err(DbError::from)?;
        tracing::debug!(product_id = product.id, "Inserted product");
        Ok(product)
    }

    async fn update(&self, id: DbId, input: &UpdateProduct) -> DbResult<Product> {
        let mut tx = self.pool.begin().await.map_err(DbError::from)?;

        let query = format!(
            "UPDATE products
             SET name = $2, description = $3, price = $4, img_url = $5, date = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.img_url)
            .bind(input.date)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(DbError::RowNotFound)?;

        Self::replace_categories(&mut tx, id, &input.category_ids).await?;

        tx.commit().await.map_err(DbError::from)?;
        tracing::debug!(product_id = id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::RowNotFound);
        }
        tracing::debug!(product_id = id, "Deleted product");
        Ok(())
    }
}
