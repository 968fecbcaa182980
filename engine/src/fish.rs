//! Fish records and the tombstone entry type.

use crate::Cents;
use serde::{Deserialize, Serialize};

/// Availability of a fish for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FishStatus {
    /// On the menu and orderable
    Available,
    /// Listed but sold out or withheld
    Unavailable,
}

/// A sellable fish record.
///
/// Carries no identity of its own; identity is the inventory key the record
/// is stored under. Fields are not validated: a zero price or an empty name
/// is accepted and surfaces later as a display anomaly, matching the
/// permissive operation contracts of [`Inventory`](crate::Inventory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fish {
    /// Display name
    pub name: String,
    /// Price in currency minor units (1724 is $17.24)
    pub price: Cents,
    /// Whether the fish can currently be ordered
    pub status: FishStatus,
    /// Short marketing description
    pub description: String,
    /// Image reference or URL
    pub image: String,
}

impl Fish {
    /// Create a new fish record.
    pub fn new(
        name: impl Into<String>,
        price: Cents,
        status: FishStatus,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            status,
            description: description.into(),
            image: image.into(),
        }
    }

    /// Check whether the fish is orderable.
    pub fn is_available(&self) -> bool {
        self.status == FishStatus::Available
    }
}

/// An inventory entry: a live record or a tombstone.
///
/// Deletions keep the key and store [`FishEntry::Deleted`] rather than
/// removing the entry, so the remote mirror observes and propagates the
/// deletion. Consumers must handle both cases; a tombstone is never
/// orderable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entry", content = "fish", rename_all = "lowercase")]
pub enum FishEntry {
    /// A live record
    Present(Fish),
    /// Tombstone marking a deleted record
    Deleted,
}

impl FishEntry {
    /// Check if the entry holds a live record.
    pub fn is_present(&self) -> bool {
        matches!(self, FishEntry::Present(_))
    }

    /// Check if the entry is a tombstone.
    pub fn is_deleted(&self) -> bool {
        matches!(self, FishEntry::Deleted)
    }

    /// Get the live record, if any.
    pub fn fish(&self) -> Option<&Fish> {
        match self {
            FishEntry::Present(fish) => Some(fish),
            FishEntry::Deleted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn halibut() -> Fish {
        Fish::new(
            "Pacific Halibut",
            1724,
            FishStatus::Available,
            "Everyones favorite white fish.",
            "/images/hali.jpg",
        )
    }

    #[test]
    fn create_fish() {
        let fish = halibut();
        assert_eq!(fish.name, "Pacific Halibut");
        assert_eq!(fish.price, 1724);
        assert!(fish.is_available());
    }

    #[test]
    fn unavailable_fish() {
        let mut fish = halibut();
        fish.status = FishStatus::Unavailable;
        assert!(!fish.is_available());
    }

    #[test]
    fn entry_accessors() {
        let present = FishEntry::Present(halibut());
        assert!(present.is_present());
        assert!(!present.is_deleted());
        assert_eq!(present.fish().unwrap().name, "Pacific Halibut");

        let deleted = FishEntry::Deleted;
        assert!(deleted.is_deleted());
        assert!(deleted.fish().is_none());
    }

    #[test]
    fn serialization_roundtrip() {
        let entry = FishEntry::Present(halibut());
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: FishEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, parsed);
    }

    #[test]
    fn serialization_format() {
        let fish = halibut();
        let json = serde_json::to_string(&fish).unwrap();
        assert!(json.contains("\"status\":\"available\""));

        // Tombstones are tagged, not null, so they survive any transport.
        let json = serde_json::to_string(&FishEntry::Deleted).unwrap();
        assert!(json.contains("\"entry\":\"deleted\""));

        let json = serde_json::to_string(&FishEntry::Present(halibut())).unwrap();
        assert!(json.contains("\"entry\":\"present\""));
        assert!(json.contains("\"fish\""));
    }
}
