//! HTTP handlers: thin glue mapping requests to service calls.

pub mod category;
pub mod product;
