//! The fixed demo data set.
//!
//! Nine fishes under the stable import keys `fish1`..`fish9`, used by
//! [`Inventory::load_samples`](crate::Inventory::load_samples) to seed a
//! first-run or demo store. Prices are in minor units.

use crate::{Fish, FishKey, FishStatus};

/// The demo inventory, keyed by stable import keys.
pub fn sample_fishes() -> Vec<(FishKey, Fish)> {
    vec![
        (
            "fish1".to_string(),
            Fish::new(
                "Pacific Halibut",
                1724,
                FishStatus::Available,
                "Everyones favorite white fish. We will cut it to the size you need and ship it.",
                "/images/hali.jpg",
            ),
        ),
        (
            "fish2".to_string(),
            Fish::new(
                "Lobster",
                3200,
                FishStatus::Available,
                "These tender, mouth-watering beauties are a fantastic hit at any dinner party.",
                "/images/lobster.jpg",
            ),
        ),
        (
            "fish3".to_string(),
            Fish::new(
                "Sea Scallops",
                1684,
                FishStatus::Available,
                "Big, sweet and tender. True dry-pack scallops from the icy waters of Alaska. About 8-10 per pound",
                "/images/scallops.jpg",
            ),
        ),
        (
            "fish4".to_string(),
            Fish::new(
                "Mahi Mahi",
                1129,
                FishStatus::Available,
                "Lean flesh with a mild, sweet flavor profile, moderately firm texture and large, moist flakes.",
                "/images/mahi.jpg",
            ),
        ),
        (
            "fish5".to_string(),
            Fish::new(
                "King Crab",
                4234,
                FishStatus::Available,
                "Crack these open and enjoy them plain or with one of our cocktail sauces",
                "/images/crab.jpg",
            ),
        ),
        (
            "fish6".to_string(),
            Fish::new(
                "Atlantic Salmon",
                1453,
                FishStatus::Available,
                "This flaky, oily salmon is truly the king of the sea. Bake it, grill it, broil it...as good as it gets!",
                "/images/salmon.jpg",
            ),
        ),
        (
            "fish7".to_string(),
            Fish::new(
                "Oysters",
                2543,
                FishStatus::Available,
                "A soft plump oyster with a sweet salty flavor and a clean finish.",
                "/images/oysters.jpg",
            ),
        ),
        (
            "fish8".to_string(),
            Fish::new(
                "Mussels",
                425,
                FishStatus::Available,
                "The best mussels from the Pacific Northwest with a full-flavored and complex taste.",
                "/images/mussels.jpg",
            ),
        ),
        (
            "fish9".to_string(),
            Fish::new(
                "Jumbo Prawns",
                2250,
                FishStatus::Available,
                "With 21-25 two bite prawns in each pound, these sweet morsels are perfect for shish-kabobs.",
                "/images/prawns.jpg",
            ),
        ),
    ]
}
