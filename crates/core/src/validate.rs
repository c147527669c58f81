//! Field-level validation rules for catalog products.
//!
//! Used by the service layer before any write reaches the store.

/// Maximum accepted length for a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 255;

/// Validate that a product name is non-blank and within length bounds.
pub fn validate_product_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Product name must not be blank".to_string());
    }
    if name.len() > MAX_PRODUCT_NAME_LEN {
        return Err(format!(
            "Product name must not exceed {MAX_PRODUCT_NAME_LEN} characters"
        ));
    }
    Ok(())
}

/// Validate that a product price is a positive, finite number.
pub fn validate_product_price(price: f64) -> Result<(), String> {
    if !price.is_finite() || price <= 0.0 {
        return Err("Product price must be a positive number".to_string());
    }
    Ok(())
}
