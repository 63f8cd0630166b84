//! # Order State
//!
//! The in-progress order: three optional slot selections plus derived totals.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order State Operations                               │
//! │                                                                         │
//! │  Kiosk Action             Engine Call              State Change         │
//! │  ────────────             ───────────              ────────────         │
//! │                                                                         │
//! │  Tap entree ─────────────► set_entree() ─────────► entree = snapshot   │
//! │                                                                         │
//! │  Tap different entree ───► set_entree() ─────────► entree REPLACED     │
//! │                                                                         │
//! │  Tap side / drink ───────► set_side() /                                 │
//! │                            set_accompaniment() ──► that slot only      │
//! │                                                                         │
//! │  Start over ─────────────► reset() ──────────────► all slots cleared   │
//! │                                                                         │
//! │  View totals ────────────► totals() ─────────────► (read only)         │
//! │                                                                         │
//! │  After EVERY operation returns, subtotal equals the sum of the          │
//! │  present selections' prices, tax equals subtotal × rate, and total     │
//! │  equals subtotal + tax. There is no observable in-between state.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Replacement, Not Accumulation
//! Each category holds at most one selection. Setting a category that is
//! already filled swaps the snapshot and the totals follow; the prior item's
//! price never lingers in the subtotal. Totals are recomputed from scratch by
//! summing the present selections, so there is no shadow bookkeeping that
//! could drift out of sync with the slots.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::catalog::MenuCatalog;
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Category, MenuItem, TaxRate};
use crate::DEFAULT_TAX_RATE_BPS;

// =============================================================================
// Selection
// =============================================================================

/// A slot's current selection: a frozen snapshot of the resolved menu item.
///
/// ## Design Notes
/// - `item_id`: reference back to the catalog item (machine identity)
/// - `name` / `price_cents`: frozen copies taken at selection time, so the
///   order stays internally consistent no matter what happens outside it
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Catalog item ID (UUID).
    pub item_id: String,

    /// Item name at time of selection (frozen).
    pub name: String,

    /// Price in cents at time of selection (frozen).
    pub price_cents: i64,

    /// When this slot was (last) assigned.
    #[ts(as = "String")]
    pub selected_at: DateTime<Utc>,
}

impl Selection {
    /// Creates a selection snapshot from a catalog item.
    pub fn from_item(item: &MenuItem) -> Self {
        Selection {
            item_id: item.id.clone(),
            name: item.name.clone(),
            price_cents: item.price_cents,
            selected_at: Utc::now(),
        }
    }

    /// Returns the frozen price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Order State
// =============================================================================

/// The single authoritative holder of an in-progress order.
///
/// ## Invariants
/// - `subtotal` = sum of the present selections' prices (absent slots
///   contribute 0)
/// - `tax` = `subtotal × tax_rate`, `total` = `subtotal + tax`
/// - All three derived values are ≥ 0 (catalog prices are non-negative)
/// - Setting a filled category replaces its contribution, never accumulates
/// - `revision` increments once per operation that changed the order
///
/// Fields are private: the order is mutated exclusively through its own
/// operations, which re-derive the totals before returning.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderState {
    entree: Option<Selection>,
    side: Option<Selection>,
    accompaniment: Option<Selection>,
    subtotal: Money,
    tax: Money,
    total: Money,
    tax_rate: TaxRate,
    revision: u64,
}

impl OrderState {
    /// Creates an empty order at the standard 8% tax rate.
    pub fn new() -> Self {
        Self::with_tax_rate(TaxRate::from_bps(DEFAULT_TAX_RATE_BPS))
    }

    /// Creates an empty order with an explicit tax rate.
    ///
    /// The rate is fixed for the lifetime of the order.
    pub fn with_tax_rate(tax_rate: TaxRate) -> Self {
        OrderState {
            entree: None,
            side: None,
            accompaniment: None,
            subtotal: Money::zero(),
            tax: Money::zero(),
            total: Money::zero(),
            tax_rate,
            revision: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Mutating operations
    // -------------------------------------------------------------------------

    /// Sets or replaces the selection for a category.
    ///
    /// Resolves `name` against the catalog, snapshots the item into the
    /// category's slot, and re-derives subtotal, tax, and total.
    ///
    /// ## Errors
    /// [`CoreError::ItemNotFound`] if `name` is not in the catalog for that
    /// category. On error, nothing is mutated: the lookup happens before any
    /// state is touched, so a failed call leaves the order exactly as it was.
    ///
    /// [`CoreError::ItemNotFound`]: crate::error::CoreError::ItemNotFound
    pub fn select(
        &mut self,
        catalog: &MenuCatalog,
        category: Category,
        name: &str,
    ) -> CoreResult<()> {
        let item = catalog.lookup(category, name)?;
        *self.slot_mut(category) = Some(Selection::from_item(item));
        self.recompute();
        self.revision += 1;
        Ok(())
    }

    /// Sets or replaces the entree. See [`select`](OrderState::select).
    pub fn set_entree(&mut self, catalog: &MenuCatalog, name: &str) -> CoreResult<()> {
        self.select(catalog, Category::Entree, name)
    }

    /// Sets or replaces the side. See [`select`](OrderState::select).
    pub fn set_side(&mut self, catalog: &MenuCatalog, name: &str) -> CoreResult<()> {
        self.select(catalog, Category::Side, name)
    }

    /// Sets or replaces the accompaniment. See [`select`](OrderState::select).
    pub fn set_accompaniment(&mut self, catalog: &MenuCatalog, name: &str) -> CoreResult<()> {
        self.select(catalog, Category::Accompaniment, name)
    }

    /// Clears one category's selection.
    ///
    /// Returns `true` if the slot held a selection. Clearing an empty slot is
    /// a no-op and does not bump the revision.
    pub fn clear(&mut self, category: Category) -> bool {
        let slot = self.slot_mut(category);
        if slot.is_none() {
            return false;
        }
        *slot = None;
        self.recompute();
        self.revision += 1;
        true
    }

    /// Returns the order to its initial empty state.
    ///
    /// Idempotent: resetting an already-empty order changes nothing, not even
    /// the revision, so "nothing happened" is observable as such.
    pub fn reset(&mut self) {
        if self.is_empty() {
            return;
        }
        self.entree = None;
        self.side = None;
        self.accompaniment = None;
        self.recompute();
        self.revision += 1;
    }

    /// Re-derives subtotal, tax, and total from the current selections.
    ///
    /// Subtotal is recomputed from scratch as the sum over present slots;
    /// there is no per-category running contribution to undo.
    fn recompute(&mut self) {
        let mut subtotal = Money::zero();
        for category in Category::ALL {
            if let Some(selection) = self.selection(category) {
                subtotal += selection.price();
            }
        }
        self.subtotal = subtotal;
        self.tax = subtotal.calculate_tax(self.tax_rate);
        self.total = subtotal + self.tax;
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<Selection> {
        match category {
            Category::Entree => &mut self.entree,
            Category::Side => &mut self.side,
            Category::Accompaniment => &mut self.accompaniment,
        }
    }

    // -------------------------------------------------------------------------
    // Read accessors (no mutation)
    // -------------------------------------------------------------------------

    /// The selection currently in a category's slot, if any.
    pub fn selection(&self, category: Category) -> Option<&Selection> {
        match category {
            Category::Entree => self.entree.as_ref(),
            Category::Side => self.side.as_ref(),
            Category::Accompaniment => self.accompaniment.as_ref(),
        }
    }

    /// The current entree selection, if any.
    pub fn entree(&self) -> Option<&Selection> {
        self.entree.as_ref()
    }

    /// The current side selection, if any.
    pub fn side(&self) -> Option<&Selection> {
        self.side.as_ref()
    }

    /// The current accompaniment selection, if any.
    pub fn accompaniment(&self) -> Option<&Selection> {
        self.accompaniment.as_ref()
    }

    /// Sum of the present selections' prices, pre-tax. Zero when empty.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Tax on the current subtotal. Zero when empty.
    pub fn tax(&self) -> Money {
        self.tax
    }

    /// Subtotal plus tax. Zero when empty.
    pub fn total(&self) -> Money {
        self.total
    }

    /// The order's fixed tax rate.
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Counter that increments once per completed state-changing operation.
    ///
    /// Consumers that poll the order can compare revisions to detect change;
    /// the counter only moves after the full invariant-preserving update has
    /// completed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Checks whether no category is currently selected.
    pub fn is_empty(&self) -> bool {
        self.entree.is_none() && self.side.is_none() && self.accompaniment.is_none()
    }

    /// Number of categories currently selected (0..=3).
    pub fn selection_count(&self) -> usize {
        Category::ALL
            .iter()
            .filter(|c| self.selection(**c).is_some())
            .count()
    }

    /// Totals snapshot for API responses.
    pub fn totals(&self) -> OrderTotals {
        OrderTotals::from(self)
    }
}

impl Default for OrderState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// Order totals summary for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub selection_count: usize,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub revision: u64,
}

impl From<&OrderState> for OrderTotals {
    fn from(order: &OrderState) -> Self {
        OrderTotals {
            selection_count: order.selection_count(),
            subtotal_cents: order.subtotal().cents(),
            tax_cents: order.tax().cents(),
            total_cents: order.total().cents(),
            revision: order.revision(),
        }
    }
}

// =============================================================================
// Order Session
// =============================================================================

/// One order-building session's handle on its order.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<OrderState>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one caller mutates the order at a time
///
/// The engine itself is single-threaded and synchronous; this wrapper is the
/// serialization point an embedder uses when its command layer can run
/// concurrently. One session per order - never shared across orders.
#[derive(Debug)]
pub struct OrderSession {
    order: Arc<Mutex<OrderState>>,
    created_at: DateTime<Utc>,
}

impl OrderSession {
    /// Starts a session with an empty order at the standard tax rate.
    pub fn new() -> Self {
        OrderSession {
            order: Arc::new(Mutex::new(OrderState::new())),
            created_at: Utc::now(),
        }
    }

    /// When this session began.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Executes a function with read access to the order.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = session.with_order(|order| order.totals());
    /// ```
    pub fn with_order<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderState) -> R,
    {
        let order = self.order.lock().expect("Order mutex poisoned");
        f(&order)
    }

    /// Executes a function with write access to the order.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session.with_order_mut(|order| order.set_entree(&catalog, "pizza"))?;
    /// ```
    pub fn with_order_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderState) -> R,
    {
        let mut order = self.order.lock().expect("Order mutex poisoned");
        f(&mut order)
    }

    /// Sets or replaces one category's selection and returns fresh totals.
    pub fn select(
        &self,
        catalog: &MenuCatalog,
        category: Category,
        name: &str,
    ) -> CoreResult<OrderTotals> {
        debug!(%category, name, "select");
        self.with_order_mut(|order| {
            order.select(catalog, category, name)?;
            Ok(order.totals())
        })
    }

    /// Resets the order and returns the (zeroed) totals.
    pub fn reset(&self) -> OrderTotals {
        debug!("reset order");
        self.with_order_mut(|order| {
            order.reset();
            order.totals()
        })
    }

    /// Current totals snapshot.
    pub fn totals(&self) -> OrderTotals {
        self.with_order(|order| order.totals())
    }
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn sample_catalog() -> MenuCatalog {
        MenuCatalog::new()
            .with_item(Category::Entree, "pizza", 600)
            .with_item(Category::Entree, "pasta", 500)
            .with_item(Category::Side, "fries", 200)
            .with_item(Category::Side, "slaw", 150)
            .with_item(Category::Accompaniment, "salad", 100)
            .with_item(Category::Accompaniment, "soda", 0)
    }

    /// Sum over present selections, computed independently of the engine.
    fn expected_subtotal(order: &OrderState) -> Money {
        Category::ALL
            .iter()
            .filter_map(|c| order.selection(*c))
            .map(Selection::price)
            .fold(Money::zero(), |acc, p| acc + p)
    }

    fn assert_invariants(order: &OrderState) {
        assert_eq!(order.subtotal(), expected_subtotal(order));
        assert_eq!(order.tax(), order.subtotal().calculate_tax(order.tax_rate()));
        assert_eq!(order.total(), order.subtotal() + order.tax());
        assert!(!order.subtotal().is_negative());
        assert!(!order.tax().is_negative());
        assert!(!order.total().is_negative());
    }

    #[test]
    fn test_new_order_is_empty_with_zero_totals() {
        let order = OrderState::new();
        assert!(order.is_empty());
        assert_eq!(order.selection_count(), 0);
        assert!(order.entree().is_none());
        assert!(order.side().is_none());
        assert!(order.accompaniment().is_none());
        assert_eq!(order.subtotal(), Money::zero());
        assert_eq!(order.tax(), Money::zero());
        assert_eq!(order.total(), Money::zero());
        assert_eq!(order.revision(), 0);
    }

    #[test]
    fn test_scenario_build_replace_reset() {
        // The canonical walk-through: pizza, fries, entree swap, reset.
        let catalog = sample_catalog();
        let mut order = OrderState::new();

        order.set_entree(&catalog, "pizza").unwrap();
        assert_eq!(order.subtotal().cents(), 600);
        assert_eq!(order.tax().cents(), 48);
        assert_eq!(order.total().cents(), 648);
        assert_invariants(&order);

        order.set_side(&catalog, "fries").unwrap();
        assert_eq!(order.subtotal().cents(), 800);
        assert_eq!(order.tax().cents(), 64);
        assert_eq!(order.total().cents(), 864);
        assert_invariants(&order);

        order.set_entree(&catalog, "pasta").unwrap();
        assert_eq!(order.subtotal().cents(), 700);
        assert_eq!(order.tax().cents(), 56);
        assert_eq!(order.total().cents(), 756);
        assert_invariants(&order);

        order.reset();
        assert!(order.is_empty());
        assert_eq!(order.subtotal(), Money::zero());
        assert_eq!(order.tax(), Money::zero());
        assert_eq!(order.total(), Money::zero());
    }

    #[test]
    fn test_replacement_never_accumulates() {
        let catalog = sample_catalog();
        let mut order = OrderState::new();

        order.set_entree(&catalog, "pizza").unwrap();
        order.set_entree(&catalog, "pasta").unwrap();

        // Only pasta's price contributes, never pizza + pasta
        assert_eq!(order.subtotal().cents(), 500);
        assert_eq!(order.entree().unwrap().name, "pasta");
        assert_eq!(order.selection_count(), 1);
        assert_invariants(&order);
    }

    #[test]
    fn test_reselecting_same_item_keeps_totals() {
        let catalog = sample_catalog();
        let mut order = OrderState::new();

        order.set_side(&catalog, "fries").unwrap();
        order.set_side(&catalog, "fries").unwrap();

        assert_eq!(order.subtotal().cents(), 200);
        assert_invariants(&order);
    }

    #[test]
    fn test_other_categories_untouched_on_set() {
        let catalog = sample_catalog();
        let mut order = OrderState::new();

        order.set_entree(&catalog, "pizza").unwrap();
        order.set_side(&catalog, "fries").unwrap();
        order.set_accompaniment(&catalog, "salad").unwrap();
        order.set_side(&catalog, "slaw").unwrap();

        assert_eq!(order.entree().unwrap().name, "pizza");
        assert_eq!(order.side().unwrap().name, "slaw");
        assert_eq!(order.accompaniment().unwrap().name, "salad");
        assert_eq!(order.subtotal().cents(), 600 + 150 + 100);
        assert_invariants(&order);
    }

    #[test]
    fn test_order_independence_of_final_totals() {
        let catalog = sample_catalog();

        let sequences: [[(Category, &str); 3]; 3] = [
            [
                (Category::Entree, "pizza"),
                (Category::Side, "fries"),
                (Category::Accompaniment, "salad"),
            ],
            [
                (Category::Accompaniment, "salad"),
                (Category::Entree, "pizza"),
                (Category::Side, "fries"),
            ],
            [
                (Category::Side, "fries"),
                (Category::Accompaniment, "salad"),
                (Category::Entree, "pizza"),
            ],
        ];

        let mut totals = Vec::new();
        for seq in &sequences {
            let mut order = OrderState::new();
            for (category, name) in seq {
                order.select(&catalog, *category, name).unwrap();
                assert_invariants(&order);
            }
            totals.push((
                order.subtotal().cents(),
                order.tax().cents(),
                order.total().cents(),
            ));
        }

        assert_eq!(totals[0], (900, 72, 972));
        assert_eq!(totals[0], totals[1]);
        assert_eq!(totals[1], totals[2]);
    }

    #[test]
    fn test_failed_lookup_leaves_order_untouched() {
        let catalog = sample_catalog();
        let mut order = OrderState::new();
        order.set_entree(&catalog, "pizza").unwrap();
        let revision = order.revision();

        let err = order.set_entree(&catalog, "sushi").unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound { .. }));

        // No partial mutation: selection, totals, and revision all unchanged
        assert_eq!(order.entree().unwrap().name, "pizza");
        assert_eq!(order.subtotal().cents(), 600);
        assert_eq!(order.revision(), revision);
        assert_invariants(&order);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let catalog = sample_catalog();
        let mut order = OrderState::new();
        order.set_entree(&catalog, "pizza").unwrap();

        order.reset();
        let after_first = order.revision();
        order.reset();
        order.reset();

        assert!(order.is_empty());
        assert_eq!(order.subtotal(), Money::zero());
        assert_eq!(order.tax(), Money::zero());
        assert_eq!(order.total(), Money::zero());
        // Repeat resets observed nothing to do
        assert_eq!(order.revision(), after_first);
    }

    #[test]
    fn test_reset_on_fresh_order_is_a_no_op() {
        let mut order = OrderState::new();
        order.reset();
        assert_eq!(order.revision(), 0);
        assert!(order.is_empty());
    }

    #[test]
    fn test_clear_single_category() {
        let catalog = sample_catalog();
        let mut order = OrderState::new();
        order.set_entree(&catalog, "pizza").unwrap();
        order.set_side(&catalog, "fries").unwrap();

        assert!(order.clear(Category::Entree));
        assert!(order.entree().is_none());
        assert_eq!(order.side().unwrap().name, "fries");
        assert_eq!(order.subtotal().cents(), 200);
        assert_invariants(&order);

        // Clearing an already-empty slot reports false and changes nothing
        let revision = order.revision();
        assert!(!order.clear(Category::Entree));
        assert_eq!(order.revision(), revision);
    }

    #[test]
    fn test_zero_priced_item_counts_as_selected() {
        let catalog = sample_catalog();
        let mut order = OrderState::new();
        order.set_accompaniment(&catalog, "soda").unwrap();

        assert_eq!(order.selection_count(), 1);
        assert!(!order.is_empty());
        assert_eq!(order.subtotal(), Money::zero());
        assert_eq!(order.total(), Money::zero());
        assert_invariants(&order);
    }

    #[test]
    fn test_revision_tracks_completed_operations() {
        let catalog = sample_catalog();
        let mut order = OrderState::new();

        order.set_entree(&catalog, "pizza").unwrap();
        assert_eq!(order.revision(), 1);
        order.set_entree(&catalog, "pasta").unwrap();
        assert_eq!(order.revision(), 2);
        order.reset();
        assert_eq!(order.revision(), 3);
    }

    #[test]
    fn test_selection_snapshot_freezes_price() {
        let catalog = sample_catalog();
        let mut order = OrderState::new();
        order.set_entree(&catalog, "pizza").unwrap();

        let selection = order.entree().unwrap();
        let item = catalog.lookup(Category::Entree, "pizza").unwrap();
        assert_eq!(selection.item_id, item.id);
        assert_eq!(selection.price_cents, item.price_cents);
    }

    #[test]
    fn test_totals_snapshot() {
        let catalog = sample_catalog();
        let mut order = OrderState::new();
        order.set_entree(&catalog, "pizza").unwrap();
        order.set_side(&catalog, "fries").unwrap();

        let totals = order.totals();
        assert_eq!(totals.selection_count, 2);
        assert_eq!(totals.subtotal_cents, 800);
        assert_eq!(totals.tax_cents, 64);
        assert_eq!(totals.total_cents, 864);
        assert_eq!(totals.revision, 2);
    }

    #[test]
    fn test_totals_serialize_camel_case() {
        let totals = OrderTotals {
            selection_count: 1,
            subtotal_cents: 600,
            tax_cents: 48,
            total_cents: 648,
            revision: 1,
        };
        let json = serde_json::to_value(&totals).unwrap();
        assert_eq!(json["subtotalCents"], 600);
        assert_eq!(json["taxCents"], 48);
        assert_eq!(json["totalCents"], 648);
        assert_eq!(json["selectionCount"], 1);
    }

    #[test]
    fn test_custom_tax_rate() {
        let catalog = sample_catalog();
        let mut order = OrderState::with_tax_rate(TaxRate::zero());
        order.set_entree(&catalog, "pizza").unwrap();

        assert_eq!(order.subtotal().cents(), 600);
        assert_eq!(order.tax(), Money::zero());
        assert_eq!(order.total().cents(), 600);
    }

    #[test]
    fn test_session_select_and_reset() {
        let catalog = sample_catalog();
        let session = OrderSession::new();

        let totals = session
            .select(&catalog, Category::Entree, "pizza")
            .unwrap();
        assert_eq!(totals.subtotal_cents, 600);
        assert_eq!(totals.total_cents, 648);

        let totals = session.select(&catalog, Category::Side, "fries").unwrap();
        assert_eq!(totals.total_cents, 864);

        let totals = session.reset();
        assert_eq!(totals.subtotal_cents, 0);
        assert_eq!(totals.selection_count, 0);
        assert_eq!(session.totals(), totals);
    }

    #[test]
    fn test_session_surfaces_lookup_error() {
        let catalog = sample_catalog();
        let session = OrderSession::new();

        let before = session.totals();
        let err = session
            .select(&catalog, Category::Entree, "sushi")
            .unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound { .. }));
        assert_eq!(session.totals(), before);
    }
}
