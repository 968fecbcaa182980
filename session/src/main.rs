//! Catch session demo binary.
//!
//! Plays both sides of one store through the in-process loopback adapter:
//! an owner session seeds the demo inventory, a customer session picks it
//! up over the mirror, places a small order, and prints the running total.

use std::sync::Arc;

use catch_engine::format_price;
use catch_session::{Config, DirStorage, LoopbackAdapter, MemoryStorage, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catch_session=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    let store_name = config
        .store_name
        .clone()
        .unwrap_or_else(catch_session::names::fun_name);

    tracing::info!(store = %store_name, data_dir = %config.data_dir.display(), "starting catch session");

    let adapter = LoopbackAdapter::new();

    // Each session is its own "device": local storage is per-device, the
    // mirror is what they share.
    let mut owner = Session::open(&store_name, Arc::new(MemoryStorage::new()), &adapter)?;
    let mut customer = Session::open(
        &store_name,
        Arc::new(DirStorage::new(&config.data_dir)),
        &adapter,
    )?;

    // The owner stocks the shelves; the mirror carries them to the customer.
    owner.load_sample_fishes();
    customer.recv_remote().await;
    tracing::info!(fishes = customer.inventory().len(), "inventory mirrored");

    customer.add_to_order("fish1");
    customer.add_to_order("fish1");
    customer.add_to_order("fish2");

    for (key, quantity) in customer.order().items() {
        let name = customer
            .inventory()
            .fish(key)
            .map(|fish| fish.name.as_str())
            .unwrap_or("no longer available");
        tracing::info!(key = %key, quantity, fish = %name, "order line");
    }

    tracing::info!(total = %format_price(customer.order_total()), "order total");

    customer.close()?;
    owner.close()?;

    Ok(())
}
