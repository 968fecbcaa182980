//! The order ledger - the customer's current selection.
//!
//! Maps inventory keys to quantities. The ledger never validates keys
//! against the inventory: a line whose fish has since been tombstoned keeps
//! its quantity (so restocking restores the selection) and simply stops
//! counting toward the total.

use crate::{Cents, FishKey, Inventory, OrderSnapshot, Quantity};
use std::collections::BTreeMap;

/// The customer's selected items and quantities.
///
/// Invariant: a stored quantity is always >= 1. Removal deletes the key;
/// zero entries are never written, and zero quantities found in persisted
/// data are dropped on load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderLedger {
    items: BTreeMap<FishKey, Quantity>,
}

impl OrderLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Restore a ledger from a persisted snapshot.
    pub fn from_snapshot(snapshot: OrderSnapshot) -> Self {
        Self {
            items: snapshot
                .items
                .into_iter()
                .filter(|&(_, quantity)| quantity > 0)
                .collect(),
        }
    }

    /// Add one unit of `key`, inserting the line at 1 when absent.
    ///
    /// Returns the new quantity. There is no upper bound below the integer
    /// width; at the width the quantity saturates rather than wrapping.
    pub fn add(&mut self, key: impl Into<FishKey>) -> Quantity {
        let quantity = self.items.entry(key.into()).or_insert(0);
        *quantity = quantity.saturating_add(1);
        *quantity
    }

    /// Remove the line for `key` entirely.
    ///
    /// Idempotent: returns `false` (not an error) when the key is absent.
    pub fn remove(&mut self, key: &str) -> bool {
        self.items.remove(key).is_some()
    }

    /// Quantity for `key`, or `None` when the key is not in the order.
    pub fn quantity(&self, key: &str) -> Option<Quantity> {
        self.items.get(key).copied()
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the order is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over line items in key order.
    pub fn items(&self) -> impl Iterator<Item = (&FishKey, Quantity)> {
        self.items.iter().map(|(key, &quantity)| (key, quantity))
    }

    /// Order total in minor units.
    ///
    /// Counts only lines whose fish is currently present and available;
    /// tombstoned or unavailable lines contribute nothing. Saturates
    /// instead of overflowing on absurd inputs.
    pub fn total(&self, inventory: &Inventory) -> Cents {
        self.items
            .iter()
            .map(|(key, &quantity)| match inventory.fish(key) {
                Some(fish) if fish.is_available() => fish.price.saturating_mul(quantity as Cents),
                _ => 0,
            })
            .fold(0, Cents::saturating_add)
    }

    /// Keys of lines that no longer map to an orderable fish.
    pub fn stale_keys<'a>(&'a self, inventory: &'a Inventory) -> impl Iterator<Item = &'a FishKey> {
        self.items
            .keys()
            .filter(|key| !inventory.is_orderable(key))
    }

    /// Export the ledger for persistence.
    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot::from_items(
            self.items
                .iter()
                .map(|(key, &quantity)| (key.clone(), quantity)),
        )
    }
}
