//! The session: one store identifier, one inventory, one order ledger.
//!
//! A session owns the pair of maps for the lifetime of one visit. On open,
//! the order ledger is rehydrated from local storage and the inventory is
//! bound to the remote mirror; every local mutation then either pushes an
//! inventory snapshot to the mirror or persists the order.

use std::sync::Arc;

use catch_engine::{
    Cents, Fish, FishKey, Inventory, OrderLedger, OrderSnapshot, Quantity, StoreName, Timestamp,
};

use crate::storage::{LocalStorage, StorageError};
use crate::sync::{SyncAdapter, SyncBinding, SyncError};

/// Session errors.
///
/// Deliberately sparse: most failure modes in this system are swallowed
/// best-effort (see the module docs on persistence), so only binding and
/// the final close-time flush can fail.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("engine error: {0}")]
    Engine(#[from] catch_engine::Error),
}

/// One customer-visible browsing session for a single store.
pub struct Session {
    store_name: StoreName,
    inventory: Inventory,
    order: OrderLedger,
    storage: Arc<dyn LocalStorage>,
    binding: SyncBinding,
}

impl Session {
    /// Open a session for `store_name`.
    ///
    /// Reads local storage once, before any mutation: a persisted order
    /// becomes the initial ledger; missing, unreadable, or malformed
    /// content yields an empty ledger and a warning, never an error.
    pub fn open(
        store_name: impl Into<StoreName>,
        storage: Arc<dyn LocalStorage>,
        adapter: &dyn SyncAdapter,
    ) -> Result<Self, SessionError> {
        let store_name = store_name.into();

        let order = match storage.get(&store_name) {
            Ok(Some(text)) => match OrderSnapshot::from_json(&text) {
                Ok(snapshot) => {
                    let order = OrderLedger::from_snapshot(snapshot);
                    tracing::debug!(store = %store_name, lines = order.len(), "order rehydrated");
                    order
                }
                Err(err) => {
                    tracing::warn!(store = %store_name, %err, "persisted order unreadable, starting empty");
                    OrderLedger::new()
                }
            },
            Ok(None) => OrderLedger::new(),
            Err(err) => {
                tracing::warn!(store = %store_name, %err, "order storage unavailable, starting empty");
                OrderLedger::new()
            }
        };

        let binding = adapter.bind(&store_name)?;
        tracing::info!(store = %store_name, "session opened");

        Ok(Self {
            store_name,
            inventory: Inventory::new(),
            order,
            storage,
            binding,
        })
    }

    /// The store identifier this session is bound to.
    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    /// Read access to the inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Read access to the order ledger.
    pub fn order(&self) -> &OrderLedger {
        &self.order
    }

    /// Add a fish under a fresh timestamp-derived key.
    pub fn add_fish(&mut self, fish: Fish) -> FishKey {
        let key = self.inventory.add_fish(fish, now_ms());
        tracing::debug!(store = %self.store_name, key = %key, "fish added");
        self.push_inventory();
        key
    }

    /// Replace (or permissively create) the record at `key`.
    pub fn update_fish(&mut self, key: impl Into<FishKey>, fish: Fish) {
        let key = key.into();
        self.inventory.update_fish(key.clone(), fish);
        tracing::debug!(store = %self.store_name, key = %key, "fish updated");
        self.push_inventory();
    }

    /// Tombstone the record at `key`. No-op on missing keys.
    pub fn delete_fish(&mut self, key: &str) -> bool {
        let deleted = self.inventory.delete_fish(key);
        if deleted {
            tracing::debug!(store = %self.store_name, key = %key, "fish tombstoned");
            self.push_inventory();
        }
        deleted
    }

    /// Replace the whole inventory with the demo set.
    pub fn load_sample_fishes(&mut self) {
        self.inventory.load_samples();
        tracing::info!(store = %self.store_name, count = self.inventory.len(), "sample fishes loaded");
        self.push_inventory();
    }

    /// Add one unit of `key` to the order. Returns the new quantity.
    pub fn add_to_order(&mut self, key: impl Into<FishKey>) -> Quantity {
        let key = key.into();
        let quantity = self.order.add(key.clone());
        tracing::debug!(store = %self.store_name, key = %key, quantity, "added to order");
        self.persist_order();
        quantity
    }

    /// Remove the order line for `key` entirely. No-op on missing keys.
    pub fn delete_fish_order(&mut self, key: &str) -> bool {
        let removed = self.order.remove(key);
        if removed {
            tracing::debug!(store = %self.store_name, key = %key, "removed from order");
            self.persist_order();
        }
        removed
    }

    /// Current order total in minor units, counting only orderable lines.
    pub fn order_total(&self) -> Cents {
        self.order.total(&self.inventory)
    }

    /// Apply every remote event currently queued. Returns how many were
    /// applied.
    pub fn drain_remote(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.binding.try_recv() {
            self.inventory.apply_sync(event);
            applied += 1;
        }
        if applied > 0 {
            tracing::debug!(store = %self.store_name, applied, "remote events applied");
        }
        applied
    }

    /// Await the next remote event and apply it. Returns `false` once the
    /// stream is closed and drained.
    pub async fn recv_remote(&mut self) -> bool {
        match self.binding.recv().await {
            Some(event) => {
                self.inventory.apply_sync(event);
                true
            }
            None => false,
        }
    }

    /// Tear the session down: flush the order one final time and release
    /// the remote binding. Unlike the per-mutation writes, a failing final
    /// flush is reported.
    pub fn close(mut self) -> Result<(), SessionError> {
        let text = self.order.snapshot().to_json()?;
        self.storage.set(&self.store_name, &text)?;

        self.binding.release();
        tracing::info!(store = %self.store_name, "session closed");
        Ok(())
    }

    fn push_inventory(&self) {
        self.binding.push(self.inventory.snapshot());
    }

    fn persist_order(&self) {
        let snapshot = self.order.snapshot();
        match snapshot.to_json() {
            Ok(text) => {
                if let Err(err) = self.storage.set(&self.store_name, &text) {
                    tracing::warn!(store = %self.store_name, %err, "order persistence failed");
                }
            }
            Err(err) => {
                tracing::warn!(store = %self.store_name, %err, "order serialization failed");
            }
        }
    }
}

/// Wall-clock milliseconds since the epoch.
fn now_ms() -> Timestamp {
    chrono::Utc::now().timestamp_millis() as Timestamp
}
