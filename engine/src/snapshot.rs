//! Snapshot types bridging in-memory state to storage and sync.
//!
//! Snapshots are the serialized form of the two maps: the inventory snapshot
//! is what gets pushed to the remote mirror, the order snapshot is what gets
//! written to local storage. Both use BTreeMap for deterministic ordering.

use crate::{error::Result, Cents, Error, FishEntry, FishKey, Quantity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version of the snapshot format for future compatibility.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// A point-in-time serialized form of the inventory map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    /// Snapshot format version
    pub format_version: u32,
    /// All entries, tombstones included, in deterministic key order
    pub fishes: BTreeMap<FishKey, FishEntry>,
}

impl InventorySnapshot {
    /// Create a new empty snapshot.
    pub fn new() -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            fishes: BTreeMap::new(),
        }
    }

    /// Build a snapshot from entries.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (FishKey, FishEntry)>,
    {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            fishes: entries.into_iter().collect(),
        }
    }

    /// Get an entry from the snapshot.
    pub fn get(&self, key: &str) -> Option<&FishEntry> {
        self.fishes.get(key)
    }

    /// Count all entries, tombstones included.
    pub fn len(&self) -> usize {
        self.fishes.len()
    }

    /// Check if the snapshot has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.fishes.is_empty()
    }

    /// Count live (non-tombstone) entries.
    pub fn present_count(&self) -> usize {
        self.fishes.values().filter(|e| e.is_present()).count()
    }

    /// Serialize to JSON with deterministic ordering.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::InvalidSnapshot(e.to_string()))
    }

    /// Deserialize from JSON, rejecting snapshots from a newer format.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidSnapshot(e.to_string()))?;
        check_format_version(snapshot.format_version)?;
        Ok(snapshot)
    }
}

impl Default for InventorySnapshot {
    fn default() -> Self {
        Self::new()
    }
}

/// The serialized form of the order ledger written to local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSnapshot {
    /// Snapshot format version
    pub format_version: u32,
    /// Line items in deterministic key order
    pub items: BTreeMap<FishKey, Quantity>,
}

impl OrderSnapshot {
    /// Create a new empty snapshot.
    pub fn new() -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            items: BTreeMap::new(),
        }
    }

    /// Build a snapshot from line items.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = (FishKey, Quantity)>,
    {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            items: items.into_iter().collect(),
        }
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the snapshot has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total quantity across all line items.
    pub fn unit_count(&self) -> Cents {
        self.items.values().map(|&q| q as Cents).sum()
    }

    /// Serialize to JSON with deterministic ordering.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::InvalidSnapshot(e.to_string()))
    }

    /// Deserialize from JSON, rejecting snapshots from a newer format.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidSnapshot(e.to_string()))?;
        check_format_version(snapshot.format_version)?;
        Ok(snapshot)
    }
}

impl Default for OrderSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

fn check_format_version(version: u32) -> Result<()> {
    if version > SNAPSHOT_FORMAT_VERSION {
        return Err(Error::InvalidSnapshot(format!(
            "unsupported snapshot format version: {} (max supported: {})",
            version, SNAPSHOT_FORMAT_VERSION
        )));
    }
    Ok(())
}
