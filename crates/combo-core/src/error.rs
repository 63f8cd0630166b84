//! # Error Types
//!
//! Domain-specific error types for combo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  combo-core errors (this file)                                         │
//! │  ├── CoreError        - Catalog lookup / domain failures               │
//! │  └── ValidationError  - Catalog input validation failures              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → embedder's API error → frontend   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (category, item name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::Category;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// A lookup miss on a set-operation is a caller/configuration defect (the
/// caller is expected to only pass names sourced from the same catalog), not
/// a recoverable user input error. It still surfaces as a typed error so the
/// embedder can fail loudly, and the operation applies no partial mutation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The named item does not exist in the catalog for that category.
    ///
    /// ## When This Occurs
    /// - Caller passes a name not sourced from the catalog
    /// - Catalog was loaded with a different menu than the frontend shows
    #[error("No {category} named '{name}' in the catalog")]
    ItemNotFound { category: Category, name: String },

    /// An item with this name is already registered for the category.
    ///
    /// Names are the business key for lookup, so they must be unique per
    /// category.
    #[error("A {category} named '{name}' is already in the catalog")]
    DuplicateItem { category: Category, name: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when catalog input doesn't meet requirements.
/// Used for early validation before an item is registered.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., disallowed characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
