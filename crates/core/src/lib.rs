//! Shared domain types for the catalog backend.
//!
//! Everything here is database- and transport-agnostic: the `db` crate
//! maps these types to PostgreSQL, the `api` crate maps them to HTTP.

pub mod error;
pub mod pagination;
pub mod types;
pub mod validate;
