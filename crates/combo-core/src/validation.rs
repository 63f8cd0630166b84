//! # Validation Module
//!
//! Input validation for catalog registration.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog loader (embedder)                                    │
//! │  └── Whatever shape its menu source has (JSON file, admin tool)        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE, at MenuCatalog::add_item                        │
//! │  ├── Name is non-empty, bounded, printable                             │
//! │  └── Price is non-negative                                             │
//! │                                                                         │
//! │  Once an item is registered, the order engine can trust it blindly:    │
//! │  non-negative prices are what make subtotal/tax/total provably ≥ 0     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use combo_core::validation::{validate_item_name, validate_price_cents};
//!
//! validate_item_name("pizza").unwrap();
//! validate_price_cents(600).unwrap();
//! assert!(validate_price_cents(-1).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a menu item name.
pub const MAX_ITEM_NAME_LEN: usize = 100;

// =============================================================================
// Validators
// =============================================================================

/// Validates a menu item name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
/// - Must not contain control characters
///
/// ## Example
/// ```rust
/// use combo_core::validation::validate_item_name;
///
/// assert!(validate_item_name("pizza").is_ok());
/// assert!(validate_item_name("  ").is_err());
/// assert!(validate_item_name("a\tb").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    if name.chars().any(|c| c.is_control()) {
        return Err(ValidationError::InvalidFormat {
            field: "name".to_string(),
            reason: "must not contain control characters".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must not be negative
///
/// Non-negative prices at the catalog boundary are what let the order engine
/// guarantee subtotal, tax, and total never go negative.
pub fn validate_price_cents(price_cents: i64) -> ValidationResult<()> {
    if price_cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price_cents".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
