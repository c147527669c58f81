//! Repository for the `roles` table.
//!
//! Roles are seeded by migrations and never mutated through this layer.

use async_trait::async_trait;
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::role::Role;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, authority, created_at, updated_at";

/// Store contract for roles. Read-only.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Find a role by its internal ID.
    async fn find_by_id(&self, id: DbId) -> DbResult<Option<Role>>;

    /// Find a role by authority name (case-sensitive).
    async fn find_by_authority(&self, authority: &str) -> DbResult<Option<Role>>;

    /// List all roles ordered by ID ascending.
    async fn list(&self) -> DbResult<Vec<Role>>;
}

/// PostgreSQL implementation of [`RoleRepository`].
#[derive(Clone)]
pub struct PgRoleRepository {
    pool: PgPool,
}

impl PgRoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    async fn find_by_id(&self, id: DbId) -> DbResult<Option<Role>> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE id = $1");
        let role = sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(role)
    }

    async fn find_by_authority(&self, authority: &str) -> DbResult<Option<Role>> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE authority = $1");
        let role = sqlx::query_as::<_, Role>(&query)
            .bind(authority)
            .fetch_optional(&self.pool)
            .await?;
        Ok(role)
    }

    async fn list(&self) -> DbResult<Vec<Role>> {
        let query = format!("SELECT {COLUMNS} FROM roles ORDER BY id ASC");
        let roles = sqlx::query_as::<_, Role>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(roles)
    }
}
