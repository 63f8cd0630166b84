//! # Menu Catalog
//!
//! The read-only lookup collaborator the order engine resolves names against.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Lifecycle                                   │
//! │                                                                         │
//! │  ┌──────────┐   add_item × N   ┌──────────┐    lookup only   ┌───────┐ │
//! │  │  Empty   │─────────────────►│  Loaded  │─────────────────►│ Order │ │
//! │  │ Catalog  │  (validated)     │  Catalog │  (&MenuCatalog)  │Session│ │
//! │  └──────────┘                  └──────────┘                  └───────┘ │
//! │                                                                         │
//! │  The embedder loads the menu once (from wherever it keeps it), then    │
//! │  hands the engine a shared reference. Catalog mutation during an       │
//! │  order-building session is out of scope.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::{Category, MenuItem};
use crate::validation::{validate_item_name, validate_price_cents};

// =============================================================================
// Menu Catalog
// =============================================================================

/// A fixed menu of selectable items, keyed by name within each category.
///
/// ## Invariants
/// - Names are unique per category (they are the lookup key)
/// - Every registered price is non-negative (validated at registration)
/// - Items keep their registration order within a category, for UI listing
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: HashMap<Category, Vec<MenuItem>>,
}

impl MenuCatalog {
    /// Creates a new empty catalog.
    pub fn new() -> Self {
        MenuCatalog {
            items: HashMap::new(),
        }
    }

    /// Registers an item under a category.
    ///
    /// The name is trimmed and becomes the business key for [`lookup`].
    /// A fresh UUID is assigned as the item's machine identity.
    ///
    /// ## Errors
    /// - [`CoreError::Validation`] if the name or price is invalid
    /// - [`CoreError::DuplicateItem`] if the category already has that name
    ///
    /// [`lookup`]: MenuCatalog::lookup
    pub fn add_item(
        &mut self,
        category: Category,
        name: &str,
        price_cents: i64,
    ) -> CoreResult<&MenuItem> {
        validate_item_name(name)?;
        validate_price_cents(price_cents)?;

        let name = name.trim();
        let slot = self.items.entry(category).or_default();

        if slot.iter().any(|i| i.name == name) {
            return Err(CoreError::DuplicateItem {
                category,
                name: name.to_string(),
            });
        }

        slot.push(MenuItem {
            id: Uuid::new_v4().to_string(),
            category,
            name: name.to_string(),
            price_cents,
        });
        Ok(slot.last().expect("slot is non-empty after push"))
    }

    /// Builder-style registration for catalog seeding.
    ///
    /// ## Panics
    /// Panics on invalid or duplicate input. Intended for static menus whose
    /// contents are known-good at startup; use [`add_item`] when loading
    /// untrusted data.
    ///
    /// ## Example
    /// ```rust
    /// use combo_core::catalog::MenuCatalog;
    /// use combo_core::types::Category;
    ///
    /// let catalog = MenuCatalog::new()
    ///     .with_item(Category::Entree, "pizza", 600)
    ///     .with_item(Category::Side, "fries", 200);
    /// assert_eq!(catalog.len(), 2);
    /// ```
    ///
    /// [`add_item`]: MenuCatalog::add_item
    #[must_use]
    pub fn with_item(mut self, category: Category, name: &str, price_cents: i64) -> Self {
        if let Err(e) = self.add_item(category, name, price_cents) {
            panic!("invalid catalog seed item '{name}': {e}");
        }
        self
    }

    /// Looks up an item by its name within a category.
    ///
    /// This is the one call the order engine makes per set-operation.
    ///
    /// ## Errors
    /// [`CoreError::ItemNotFound`] if `name` is not a key for that category.
    pub fn lookup(&self, category: Category, name: &str) -> CoreResult<&MenuItem> {
        let name = name.trim();
        self.items
            .get(&category)
            .and_then(|slot| slot.iter().find(|i| i.name == name))
            .ok_or_else(|| CoreError::ItemNotFound {
                category,
                name: name.to_string(),
            })
    }

    /// Returns all items registered under a category, in registration order.
    pub fn items(&self, category: Category) -> &[MenuItem] {
        self.items.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of items across all categories.
    pub fn len(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    /// Checks whether the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> MenuCatalog {
        MenuCatalog::new()
            .with_item(Category::Entree, "pizza", 600)
            .with_item(Category::Entree, "pasta", 500)
            .with_item(Category::Side, "fries", 200)
            .with_item(Category::Accompaniment, "salad", 100)
    }

    #[test]
    fn test_lookup_finds_registered_item() {
        let catalog = sample_catalog();
        let item = catalog.lookup(Category::Entree, "pizza").unwrap();
        assert_eq!(item.name, "pizza");
        assert_eq!(item.price_cents, 600);
        assert_eq!(item.category, Category::Entree);
    }

    #[test]
    fn test_lookup_is_per_category() {
        let catalog = sample_catalog();
        // "fries" exists, but not as an entree
        let err = catalog.lookup(Category::Entree, "fries").unwrap_err();
        assert!(matches!(
            err,
            CoreError::ItemNotFound {
                category: Category::Entree,
                ..
            }
        ));
    }

    #[test]
    fn test_lookup_unknown_name() {
        let catalog = sample_catalog();
        assert!(catalog.lookup(Category::Side, "onion rings").is_err());
    }

    #[test]
    fn test_lookup_trims_name() {
        let catalog = sample_catalog();
        assert!(catalog.lookup(Category::Entree, "  pizza ").is_ok());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut catalog = sample_catalog();
        let err = catalog.add_item(Category::Entree, "pizza", 700).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateItem { .. }));
    }

    #[test]
    fn test_same_name_allowed_across_categories() {
        let mut catalog = sample_catalog();
        // A "salad" side is a different key space than the "salad" accompaniment
        assert!(catalog.add_item(Category::Side, "salad", 250).is_ok());
    }

    #[test]
    fn test_invalid_input_rejected() {
        let mut catalog = MenuCatalog::new();
        assert!(catalog.add_item(Category::Entree, "", 600).is_err());
        assert!(catalog.add_item(Category::Entree, "pizza", -1).is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_items_listing_keeps_order() {
        let catalog = sample_catalog();
        let names: Vec<&str> = catalog
            .items(Category::Entree)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["pizza", "pasta"]);
        assert!(catalog.items(Category::Side).len() == 1);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_each_item_gets_unique_id() {
        let catalog = sample_catalog();
        let pizza = catalog.lookup(Category::Entree, "pizza").unwrap();
        let pasta = catalog.lookup(Category::Entree, "pasta").unwrap();
        assert_ne!(pizza.id, pasta.id);
    }
}
