//! Service layer: orchestrates use cases between the HTTP resource layer
//! and the repositories, enforcing existence semantics and translating
//! store failure signals into domain error kinds.

pub mod category_service;
pub mod product_service;

pub use category_service::CategoryService;
pub use product_service::ProductService;
