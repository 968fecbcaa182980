//! # Catch Engine
//!
//! The client-side state model for a "Catch of the Day" storefront: a shop
//! owner manages a fish inventory, a customer builds an order from it.
//!
//! This crate is the pure core. It owns the two flat maps and their
//! mutation rules; everything with a side effect (wall clocks, storage,
//! the sync transport) lives in the session crate on top of it.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine has no knowledge of files, network, or platform
//! - **Deterministic**: timestamps are inputs, same inputs produce same outputs
//! - **Permissive by contract**: updates upsert missing keys, deletes no-op
//!   on them, record contents are never validated - these are documented
//!   behaviors, not accidents
//!
//! ## Core Concepts
//!
//! ### Inventory
//!
//! [`Inventory`] maps generated keys (`fish<ms>`, or stable import keys for
//! the sample set) to [`FishEntry`] values. Deletion writes a tombstone
//! ([`FishEntry::Deleted`]) instead of removing the key, so deletions
//! propagate through the remote mirror like any other write.
//!
//! ### Order Ledger
//!
//! [`OrderLedger`] maps inventory keys to quantities (always >= 1; removal
//! deletes the key). It is persisted to local storage after every change
//! and rehydrated at session start.
//!
//! ### Sync Events
//!
//! Remote-originated changes arrive as [`InventoryEvent`]s and are applied
//! with the same atomic-replace semantics as local mutations. The remote
//! echo is authoritative; there is no conflict resolution.
//!
//! ### Snapshots
//!
//! [`InventorySnapshot`] and [`OrderSnapshot`] are the deterministic
//! serialized forms used for mirroring and persistence.
//!
//! ## Quick Start
//!
//! ```rust
//! use catch_engine::{format_price, Fish, FishStatus, Inventory, OrderLedger};
//!
//! let mut inventory = Inventory::new();
//! let key = inventory.add_fish(
//!     Fish::new(
//!         "Trout",
//!         399,
//!         FishStatus::Available,
//!         "Fresh from the stream.",
//!         "/images/trout.jpg",
//!     ),
//!     1_706_745_600_000, // wall-clock milliseconds, supplied by the caller
//! );
//! assert_eq!(key, "fish1706745600000");
//!
//! let mut order = OrderLedger::new();
//! order.add(key.clone());
//! order.add(key.clone());
//! assert_eq!(order.quantity(&key), Some(2));
//! assert_eq!(format_price(order.total(&inventory)), "$7.98");
//!
//! order.remove(&key);
//! assert!(order.is_empty());
//! ```

pub mod error;
pub mod fish;
pub mod inventory;
pub mod keygen;
pub mod money;
pub mod order;
pub mod sample;
pub mod snapshot;
pub mod sync;

// Re-export main types at crate root
pub use error::Error;
pub use fish::{Fish, FishEntry, FishStatus};
pub use inventory::Inventory;
pub use keygen::FishKeyGen;
pub use money::format_price;
pub use order::OrderLedger;
pub use sample::sample_fishes;
pub use snapshot::{InventorySnapshot, OrderSnapshot, SNAPSHOT_FORMAT_VERSION};
pub use sync::InventoryEvent;

/// Type aliases for clarity
pub type FishKey = String;
pub type StoreName = String;
pub type Quantity = u32;
pub type Cents = u64;
pub type Timestamp = u64;
