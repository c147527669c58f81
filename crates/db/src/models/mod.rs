//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Serialization-facing DTO projections built fresh per request
//! - `Deserialize` input DTOs for writes

pub mod category;
pub mod product;
pub mod role;
