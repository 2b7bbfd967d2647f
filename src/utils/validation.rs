//! Request-boundary checks. Services trust their inputs; handlers call these first.

use crate::error::AppError;
use crate::utils::color::is_valid_hex_color;

pub const MIN_LIMIT: u64 = 1;
pub const MAX_LIMIT: u64 = 100;

/// Reject names that are empty once trimmed.
///
/// # Errors
///
/// `BadRequest` naming `field`.
pub fn require_name(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} is required")));
    }
    Ok(())
}

/// Quantities are whole units, at least one.
///
/// # Errors
///
/// `BadRequest` when `quantity < 1`.
pub fn require_quantity(quantity: i32) -> Result<(), AppError> {
    if quantity < 1 {
        return Err(AppError::BadRequest(
            "quantity must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Prices, when given, are finite and non-negative.
///
/// # Errors
///
/// `BadRequest` for negative or non-finite prices.
pub fn require_price(price: Option<f64>) -> Result<(), AppError> {
    match price {
        Some(p) if !p.is_finite() || p < 0.0 => Err(AppError::BadRequest(
            "price must be zero or greater".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Optional colours must be hex.
///
/// # Errors
///
/// `BadRequest` when the colour is not `#RRGGBB` or `#RGB`.
pub fn require_color(color: Option<&str>) -> Result<(), AppError> {
    match color {
        Some(c) if !is_valid_hex_color(c) => Err(AppError::BadRequest(format!(
            "color must be a hex colour like #4ECDC4, got {c}"
        ))),
        _ => Ok(()),
    }
}

#[must_use]
pub fn clamp_limit(limit: Option<u64>, default: u64) -> u64 {
    limit.unwrap_or(default).clamp(MIN_LIMIT, MAX_LIMIT)
}
