//! Shared query parameter types for API handlers.

use catalog_core::pagination::{PageRequest, SortDirection};
use catalog_db::models::product::ProductSort;
use serde::Deserialize;

use crate::error::AppError;

/// Pagination and sorting parameters for product listings
/// (`?page=&size=&sort=`).
///
/// `sort` takes a whitelisted field name with an optional direction
/// suffix, e.g. `name`, `price,desc`. Page values are clamped by
/// [`PageRequest::new`].
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

impl PageQuery {
    /// Clamped page request for the repository layer.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.size)
    }

    /// Parse the sort parameter, rejecting unknown fields or directions.
    pub fn sort(&self) -> Result<(ProductSort, SortDirection), AppError> {
        let Some(raw) = self.sort.as_deref() else {
            return Ok((ProductSort::default(), SortDirection::default()));
        };

        let mut parts = raw.splitn(2, ',');
        let field = parts.next().unwrap_or("").trim();
        let sort = ProductSort::parse(field)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown sort field '{field}'")))?;

        let dir = match parts.next().map(str::trim) {
            None | Some("") | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                return Err(AppError::BadRequest(format!(
                    "Unknown sort direction '{other}'"
                )))
            }
        };

        Ok((sort, dir))
    }
}
