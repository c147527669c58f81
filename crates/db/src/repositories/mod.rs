//! Repository layer.
//!
//! Each submodule defines an async repository trait (the seam the service
//! layer is injected with) and its PostgreSQL implementation, which takes
//! a pool at construction time.

pub mod category_repo;
pub mod product_repo;
pub mod role_repo;

pub use category_repo::{CategoryRepository, PgCategoryRepository};
pub use product_repo::{PgProductRepository, ProductRepository};
pub use role_repo::{PgRoleRepository, RoleRepository};
