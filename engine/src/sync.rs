//! Event types crossing the sync boundary.
//!
//! The engine never talks to a transport. Remote-originated changes arrive
//! as a stream of [`InventoryEvent`]s which the inventory consumes with the
//! same atomic-replace semantics as local mutations. The remote echo is
//! authoritative: whatever arrives replaces local state wholesale, with no
//! client-side conflict resolution ("last write observed" wins).

use crate::{FishEntry, FishKey, InventorySnapshot};
use serde::{Deserialize, Serialize};

/// A remote-originated inventory change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InventoryEvent {
    /// Replace the entry at `key` with `entry`. Tombstones travel as
    /// [`FishEntry::Deleted`], so deletions propagate like any other write.
    Replace { key: FishKey, entry: FishEntry },
    /// Replace the whole map. Used for initial hydration when a binding
    /// attaches to a store that already has remote state.
    Snapshot(InventorySnapshot),
}
