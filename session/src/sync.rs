//! The remote sync boundary and the in-process loopback adapter.
//!
//! An adapter establishes a live two-way binding for one store identifier:
//! local inventory snapshots are pushed out, remote changes come back in as
//! [`InventoryEvent`]s. The transport behind an adapter is opaque; the
//! loopback adapter here is the in-process reference implementation used by
//! tests and the demo binary.

use std::sync::Arc;

use catch_engine::{InventoryEvent, InventorySnapshot, StoreName};
use dashmap::DashMap;
use tokio::sync::mpsc;

/// Errors from establishing a sync binding.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("sync bind failed: {0}")]
    Bind(String),
}

/// Adapter contract: establish a live binding for a store identifier.
pub trait SyncAdapter {
    fn bind(&self, store_name: &str) -> Result<SyncBinding, SyncError>;
}

/// Transport half of a binding, implemented per adapter.
pub trait SyncChannel: Send {
    /// Mirror the full inventory snapshot remotely. Best-effort: failures
    /// are the adapter's to log, not the caller's to handle.
    fn push(&self, snapshot: InventorySnapshot);

    /// Stop the flow of remote events. Idempotent. Events already queued
    /// are still delivered if the receiver drains them.
    fn release(&mut self);
}

/// A live two-way binding: snapshot pushes out, remote events in.
pub struct SyncBinding {
    channel: Box<dyn SyncChannel>,
    events: mpsc::UnboundedReceiver<InventoryEvent>,
}

impl SyncBinding {
    /// Assemble a binding from a transport channel and its event stream.
    pub fn new(
        channel: Box<dyn SyncChannel>,
        events: mpsc::UnboundedReceiver<InventoryEvent>,
    ) -> Self {
        Self { channel, events }
    }

    /// Push the full inventory snapshot toward the remote mirror.
    pub fn push(&self, snapshot: InventorySnapshot) {
        self.channel.push(snapshot);
    }

    /// Await the next remote event. `None` once the stream is closed and
    /// drained.
    pub async fn recv(&mut self) -> Option<InventoryEvent> {
        self.events.recv().await
    }

    /// Take the next remote event if one is already queued.
    pub fn try_recv(&mut self) -> Option<InventoryEvent> {
        self.events.try_recv().ok()
    }

    /// Release the binding. Queued events remain drainable.
    pub fn release(&mut self) {
        self.channel.release();
    }
}

impl Drop for SyncBinding {
    fn drop(&mut self) {
        self.channel.release();
    }
}

/// A member of a loopback room.
struct Member {
    id: String,
    sender: mpsc::UnboundedSender<InventoryEvent>,
}

/// Per-store state inside the loopback hub.
#[derive(Default)]
struct Room {
    /// Last pushed snapshot, delivered to late joiners on bind
    latest: Option<InventorySnapshot>,
    members: Vec<Member>,
}

/// In-process sync hub: bindings on the same store name see each other's
/// pushes; the latest snapshot is replayed to late joiners.
#[derive(Clone, Default)]
pub struct LoopbackAdapter {
    rooms: Arc<DashMap<StoreName, Room>>,
}

impl LoopbackAdapter {
    /// Create a new hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event to every binding of `store_name`.
    ///
    /// Stands in for a remote-originated change in tests.
    pub fn inject(&self, store_name: &str, event: InventoryEvent) {
        if let Some(room) = self.rooms.get(store_name) {
            for member in &room.members {
                let _ = member.sender.send(event.clone());
            }
        }
    }
}

impl SyncAdapter for LoopbackAdapter {
    fn bind(&self, store_name: &str) -> Result<SyncBinding, SyncError> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let member_id = uuid::Uuid::new_v4().to_string();

        let mut room = self.rooms.entry(store_name.to_string()).or_default();

        // Hydrate late joiners with the current remote state.
        if let Some(latest) = &room.latest {
            let _ = sender.send(InventoryEvent::Snapshot(latest.clone()));
        }

        room.members.push(Member {
            id: member_id.clone(),
            sender,
        });
        drop(room);

        tracing::debug!(store = %store_name, member = %member_id, "loopback binding registered");

        let channel = LoopbackChannel {
            rooms: Arc::clone(&self.rooms),
            store_name: store_name.to_string(),
            member_id,
            released: false,
        };

        Ok(SyncBinding::new(Box::new(channel), receiver))
    }
}

struct LoopbackChannel {
    rooms: Arc<DashMap<StoreName, Room>>,
    store_name: StoreName,
    member_id: String,
    released: bool,
}

impl SyncChannel for LoopbackChannel {
    fn push(&self, snapshot: InventorySnapshot) {
        // Pushes after release are swallowed, matching the best-effort
        // posture of the rest of the system.
        if self.released {
            return;
        }

        let Some(mut room) = self.rooms.get_mut(&self.store_name) else {
            return;
        };
        room.latest = Some(snapshot.clone());

        let mut recipients = 0;
        for member in &room.members {
            if member.id != self.member_id
                && member
                    .sender
                    .send(InventoryEvent::Snapshot(snapshot.clone()))
                    .is_ok()
            {
                recipients += 1;
            }
        }

        tracing::debug!(
            store = %self.store_name,
            recipients,
            "inventory snapshot mirrored"
        );
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        if let Some(mut room) = self.rooms.get_mut(&self.store_name) {
            room.members.retain(|m| m.id != self.member_id);
        }

        tracing::debug!(store = %self.store_name, member = %self.member_id, "loopback binding released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catch_engine::{Fish, FishEntry, FishStatus};

    fn snapshot_with(key: &str) -> InventorySnapshot {
        InventorySnapshot::from_entries([(
            key.to_string(),
            FishEntry::Present(Fish::new(
                "Trout",
                399,
                FishStatus::Available,
                "Fresh.",
                "/images/trout.jpg",
            )),
        )])
    }

    #[test]
    fn push_reaches_other_bindings_only() {
        let hub = LoopbackAdapter::new();
        let mut first = hub.bind("river-shop").unwrap();
        let mut second = hub.bind("river-shop").unwrap();

        first.push(snapshot_with("fish1"));

        // The pusher does not hear its own echo.
        assert!(first.try_recv().is_none());
        assert!(matches!(
            second.try_recv(),
            Some(InventoryEvent::Snapshot(s)) if s.get("fish1").is_some()
        ));
    }

    #[test]
    fn stores_are_isolated() {
        let hub = LoopbackAdapter::new();
        let first = hub.bind("river-shop").unwrap();
        let mut other = hub.bind("lake-shop").unwrap();

        first.push(snapshot_with("fish1"));

        assert!(other.try_recv().is_none());
    }

    #[test]
    fn late_joiner_is_hydrated() {
        let hub = LoopbackAdapter::new();
        let first = hub.bind("river-shop").unwrap();
        first.push(snapshot_with("fish1"));

        let mut second = hub.bind("river-shop").unwrap();
        assert!(matches!(
            second.try_recv(),
            Some(InventoryEvent::Snapshot(s)) if s.get("fish1").is_some()
        ));
    }

    #[test]
    fn release_stops_future_deliveries() {
        let hub = LoopbackAdapter::new();
        let first = hub.bind("river-shop").unwrap();
        let mut second = hub.bind("river-shop").unwrap();

        first.push(snapshot_with("fish1"));
        second.release();
        first.push(snapshot_with("fish2"));

        // The event queued before release is still drainable; nothing after.
        assert!(second.try_recv().is_some());
        assert!(second.try_recv().is_none());
    }

    #[test]
    fn push_after_release_is_swallowed() {
        let hub = LoopbackAdapter::new();
        let mut first = hub.bind("river-shop").unwrap();
        let mut second = hub.bind("river-shop").unwrap();

        first.release();
        first.push(snapshot_with("fish1"));

        assert!(second.try_recv().is_none());
    }

    #[test]
    fn inject_reaches_every_binding() {
        let hub = LoopbackAdapter::new();
        let mut first = hub.bind("river-shop").unwrap();
        let mut second = hub.bind("river-shop").unwrap();

        hub.inject(
            "river-shop",
            InventoryEvent::Replace {
                key: "fish1".to_string(),
                entry: FishEntry::Deleted,
            },
        );

        assert!(first.try_recv().is_some());
        assert!(second.try_recv().is_some());
    }
}
