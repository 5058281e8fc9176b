//! Validation errors for domain models

use rust_decimal::Decimal;
use thiserror::Error;

/// Rejected model input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field was empty
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    /// Text field contains the record separator
    #[error("{field} must not contain ',': {value}")]
    ContainsSeparator { field: &'static str, value: String },

    /// Quantity must be at least one
    #[error("quantity must be positive, got {0}")]
    Quantity(u32),

    /// Price must be non-negative
    #[error("price must be non-negative, got {0}")]
    NegativePrice(Decimal),

    /// quantity × unit price does not fit in a `Decimal`
    #[error("line total overflows: {quantity} x {unit_price}")]
    LineTotalOverflow { quantity: u32, unit_price: Decimal },

    /// Adding the line would overflow the cart total
    #[error("cart total overflows")]
    CartTotalOverflow,
}

impl ValidationError {
    /// Check a user-supplied text field that ends up in a comma-delimited file
    pub fn check_field(field: &'static str, value: &str) -> ValidationResult<()> {
        if value.trim().is_empty() {
            return Err(Self::Empty { field });
        }
        if value.contains(',') {
            return Err(Self::ContainsSeparator {
                field,
                value: value.to_string(),
            });
        }
        Ok(())
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_field() {
        assert!(ValidationError::check_field("name", "Alice").is_ok());
        assert_eq!(
            ValidationError::check_field("name", "  "),
            Err(ValidationError::Empty { field: "name" })
        );
        assert!(matches!(
            ValidationError::check_field("name", "a,b"),
            Err(ValidationError::ContainsSeparator { field: "name", .. })
        ));
    }
}
