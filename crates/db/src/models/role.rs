//! Role entity model.
//!
//! Roles carry no business logic in this slice; the entity and its
//! read-only repository exist for the seeded authority rows.

use catalog_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A role row from the `roles` table.
#[derive(Debug, Clone, FromRow)]
pub struct Role {
    pub id: DbId,
    pub authority: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
