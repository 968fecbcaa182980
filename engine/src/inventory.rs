//! The inventory - the authoritative set of fish offered for sale.
//!
//! The inventory holds one flat map from generated keys to entries. All
//! mutations are synchronous atomic replacements under `&mut`; mirroring
//! the result to the remote store is the caller's concern (the session
//! pushes a snapshot after every local mutation).

use crate::{
    sample, Fish, FishEntry, FishKey, FishKeyGen, InventoryEvent, InventorySnapshot, Timestamp,
};
use std::collections::HashMap;

/// Holds and mutates the fish on offer.
///
/// The operation contracts are deliberately permissive, matching the rest
/// of the system: updates upsert keys that do not exist, deletes no-op on
/// them, and record contents are never validated.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    entries: HashMap<FishKey, FishEntry>,
    keygen: FishKeyGen,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            keygen: FishKeyGen::new(),
        }
    }

    /// Insert `fish` under a freshly generated `fish<ms>` key.
    ///
    /// Key uniqueness is guaranteed by the monotonic generator, so this
    /// never fails; two adds with equal payloads still get distinct keys.
    pub fn add_fish(&mut self, fish: Fish, now_ms: Timestamp) -> FishKey {
        let key = self.keygen.next(now_ms);
        self.entries.insert(key.clone(), FishEntry::Present(fish));
        key
    }

    /// Replace the record at `key` with `fish`.
    ///
    /// Permissive upsert: a missing key is silently created, and a
    /// tombstoned key is revived.
    pub fn update_fish(&mut self, key: impl Into<FishKey>, fish: Fish) {
        self.entries.insert(key.into(), FishEntry::Present(fish));
    }

    /// Tombstone the entry at `key`.
    ///
    /// The key stays in the map with [`FishEntry::Deleted`] so the remote
    /// mirror observes and propagates the deletion. Returns `false` (not an
    /// error) when the key is absent or already tombstoned.
    pub fn delete_fish(&mut self, key: &str) -> bool {
        match self.entries.get_mut(key) {
            Some(entry @ FishEntry::Present(_)) => {
                *entry = FishEntry::Deleted;
                true
            }
            _ => false,
        }
    }

    /// Replace the entire map with the fixed demo set in one transition.
    ///
    /// Overwrites any existing inventory, it does not merge. Intended for
    /// first-run and demo use.
    pub fn load_samples(&mut self) {
        self.entries = sample::sample_fishes()
            .into_iter()
            .map(|(key, fish)| (key, FishEntry::Present(fish)))
            .collect();
    }

    /// Apply one remote event with the same atomic-replace semantics as
    /// local mutations. Whatever the mirror says wins.
    pub fn apply_sync(&mut self, event: InventoryEvent) {
        match event {
            InventoryEvent::Replace { key, entry } => {
                self.entries.insert(key, entry);
            }
            InventoryEvent::Snapshot(snapshot) => {
                self.entries = snapshot.fishes.into_iter().collect();
            }
        }
    }

    /// Get the entry at `key`, tombstones included.
    pub fn get(&self, key: &str) -> Option<&FishEntry> {
        self.entries.get(key)
    }

    /// Get the live record at `key`, if any.
    pub fn fish(&self, key: &str) -> Option<&Fish> {
        self.entries.get(key).and_then(FishEntry::fish)
    }

    /// Check whether `key` points at a live, available fish.
    pub fn is_orderable(&self, key: &str) -> bool {
        self.fish(key).is_some_and(Fish::is_available)
    }

    /// Check if a key exists, tombstones included.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All entries, tombstones included.
    pub fn entries(&self) -> impl Iterator<Item = (&FishKey, &FishEntry)> {
        self.entries.iter()
    }

    /// All live records.
    pub fn fishes(&self) -> impl Iterator<Item = (&FishKey, &Fish)> {
        self.entries
            .iter()
            .filter_map(|(key, entry)| entry.fish().map(|fish| (key, fish)))
    }

    /// Count of live records.
    pub fn len(&self) -> usize {
        self.entries.values().filter(|e| e.is_present()).count()
    }

    /// Check if the inventory has no live records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Export the current map as a snapshot for mirroring or persistence.
    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot::from_entries(
            self.entries
                .iter()
                .map(|(key, entry)| (key.clone(), entry.clone())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FishStatus;

    fn trout() -> Fish {
        Fish::new(
            "Trout",
            399,
            FishStatus::Available,
            "Fresh from the stream.",
            "/images/trout.jpg",
        )
    }

    #[test]
    fn add_fish_generates_timestamp_key() {
        let mut inventory = Inventory::new();
        let key = inventory.add_fish(trout(), 1_706_745_600_000);

        assert_eq!(key, "fish1706745600000");
        assert_eq!(inventory.fish(&key).unwrap().name, "Trout");
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn equal_records_get_distinct_keys() {
        let mut inventory = Inventory::new();
        let first = inventory.add_fish(trout(), 1000);
        let second = inventory.add_fish(trout(), 1000);

        assert_ne!(first, second);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn update_fish_replaces_record() {
        let mut inventory = Inventory::new();
        let key = inventory.add_fish(trout(), 1000);

        let mut updated = trout();
        updated.status = FishStatus::Unavailable;
        updated.price = 449;
        inventory.update_fish(key.clone(), updated);

        let fish = inventory.fish(&key).unwrap();
        assert_eq!(fish.price, 449);
        assert!(!inventory.is_orderable(&key));
    }

    #[test]
    fn update_missing_key_upserts() {
        let mut inventory = Inventory::new();
        inventory.update_fish("fish42", trout());

        assert!(inventory.contains("fish42"));
        assert_eq!(inventory.fish("fish42").unwrap().name, "Trout");
    }

    #[test]
    fn update_revives_tombstone() {
        let mut inventory = Inventory::new();
        let key = inventory.add_fish(trout(), 1000);
        inventory.delete_fish(&key);
        assert!(inventory.get(&key).unwrap().is_deleted());

        inventory.update_fish(key.clone(), trout());
        assert!(inventory.is_orderable(&key));
    }

    #[test]
    fn delete_fish_leaves_tombstone() {
        let mut inventory = Inventory::new();
        let key = inventory.add_fish(trout(), 1000);

        assert!(inventory.delete_fish(&key));

        // Key stays, entry is the tombstone, record is gone.
        assert!(inventory.contains(&key));
        assert_eq!(inventory.get(&key), Some(&FishEntry::Deleted));
        assert!(inventory.fish(&key).is_none());
        assert_eq!(inventory.len(), 0);
    }

    #[test]
    fn delete_missing_key_is_a_noop() {
        let mut inventory = Inventory::new();
        assert!(!inventory.delete_fish("fish999"));
        assert!(!inventory.contains("fish999"));
    }

    #[test]
    fn delete_twice_is_a_noop() {
        let mut inventory = Inventory::new();
        let key = inventory.add_fish(trout(), 1000);

        assert!(inventory.delete_fish(&key));
        assert!(!inventory.delete_fish(&key));
        assert_eq!(inventory.get(&key), Some(&FishEntry::Deleted));
    }

    #[test]
    fn load_samples_replaces_everything() {
        let mut inventory = Inventory::new();
        let key = inventory.add_fish(trout(), 1000);

        inventory.load_samples();

        assert!(!inventory.contains(&key));
        assert_eq!(inventory.len(), 9);
        assert!(inventory.is_orderable("fish1"));
    }

    #[test]
    fn sample_then_delete_leaves_tombstone() {
        let mut inventory = Inventory::new();
        inventory.load_samples();

        assert!(inventory.delete_fish("fish3"));
        assert_eq!(inventory.get("fish3"), Some(&FishEntry::Deleted));
        assert_eq!(inventory.len(), 8);
    }

    #[test]
    fn apply_sync_replace() {
        let mut inventory = Inventory::new();
        inventory.apply_sync(InventoryEvent::Replace {
            key: "fish7".to_string(),
            entry: FishEntry::Present(trout()),
        });

        assert_eq!(inventory.fish("fish7").unwrap().name, "Trout");

        // A remote tombstone wins over the local record.
        inventory.apply_sync(InventoryEvent::Replace {
            key: "fish7".to_string(),
            entry: FishEntry::Deleted,
        });
        assert_eq!(inventory.get("fish7"), Some(&FishEntry::Deleted));
    }

    #[test]
    fn apply_sync_snapshot_replaces_map() {
        let mut inventory = Inventory::new();
        inventory.add_fish(trout(), 1000);

        let snapshot = InventorySnapshot::from_entries([(
            "fish1".to_string(),
            FishEntry::Present(trout()),
        )]);
        inventory.apply_sync(InventoryEvent::Snapshot(snapshot));

        assert_eq!(inventory.len(), 1);
        assert!(inventory.contains("fish1"));
        assert!(!inventory.contains("fish1000"));
    }

    #[test]
    fn snapshot_roundtrips_through_apply() {
        let mut inventory = Inventory::new();
        inventory.load_samples();
        inventory.delete_fish("fish5");

        let snapshot = inventory.snapshot();
        assert_eq!(snapshot.len(), 9);
        assert_eq!(snapshot.present_count(), 8);

        let mut restored = Inventory::new();
        restored.apply_sync(InventoryEvent::Snapshot(snapshot));
        assert_eq!(restored.len(), 8);
        assert_eq!(restored.get("fish5"), Some(&FishEntry::Deleted));
    }
}
