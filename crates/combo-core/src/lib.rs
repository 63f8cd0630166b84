//! # combo-core: Pure Pricing/State Engine for Combo Kiosk
//!
//! This crate is the **heart** of Combo Kiosk. It tracks an in-progress order
//! of up to three selectable line items and keeps the derived monetary totals
//! consistent as selections change, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Combo Kiosk Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Kiosk Frontend                               │   │
//! │  │    Menu UI ──► Slot Picker ──► Totals Display ──► Checkout     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ command layer (embedder)               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ combo-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │   order   │  │   │
//! │  │   │ MenuItem  │  │   Money   │  │MenuCatalog│  │OrderState │  │   │
//! │  │   │ Category  │  │  TaxCalc  │  │  lookup   │  │ Selection │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Catalog loading, currency-string formatting, persistence, and         │
//! │  payment are the embedder's concerns, outside this crate.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, Category, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The read-only menu the engine resolves names against
//! - [`order`] - OrderState: selections, replacement rules, derived totals
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use combo_core::catalog::MenuCatalog;
//! use combo_core::order::OrderState;
//! use combo_core::types::Category;
//!
//! let catalog = MenuCatalog::new()
//!     .with_item(Category::Entree, "pizza", 600)
//!     .with_item(Category::Side, "fries", 200);
//!
//! let mut order = OrderState::new();
//! order.set_entree(&catalog, "pizza").unwrap();
//! order.set_side(&catalog, "fries").unwrap();
//!
//! // $8.00 subtotal, 8% tax, $8.64 total
//! assert_eq!(order.subtotal().cents(), 800);
//! assert_eq!(order.tax().cents(), 64);
//! assert_eq!(order.total().cents(), 864);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use combo_core::Money` instead of
// `use combo_core::money::Money`

pub use catalog::MenuCatalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{OrderSession, OrderState, OrderTotals, Selection};
pub use types::{Category, MenuItem, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The fixed order tax rate, in basis points (800 = 8%).
///
/// ## Why a constant?
/// The rate is fixed for the lifetime of the system; multi-jurisdiction rates
/// are out of scope. [`OrderState::with_tax_rate`] exists for embedders (and
/// tests) that need a different fixed rate.
pub const DEFAULT_TAX_RATE_BPS: u32 = 800;
