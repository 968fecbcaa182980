//! # Catch Session
//!
//! The runtime half of Catch of the Day: wires the pure
//! [`catch_engine`] state model to local on-device storage and to a remote
//! sync adapter, one [`Session`] per store identifier.
//!
//! Responsibilities:
//!
//! - rehydrate the order ledger from [`storage::LocalStorage`] before any
//!   mutation, and persist it after every order change
//! - push an inventory snapshot through the [`sync::SyncAdapter`] binding
//!   after every inventory change, and apply remote events back into the
//!   inventory on the session's own task
//! - release the binding at teardown
//!
//! The sync transport itself is out of scope; [`sync::LoopbackAdapter`] is
//! the in-process reference implementation used by tests and the demo
//! binary.

pub mod config;
pub mod names;
pub mod session;
pub mod storage;
pub mod sync;

pub use config::Config;
pub use session::{Session, SessionError};
pub use storage::{DirStorage, LocalStorage, MemoryStorage, StorageError};
pub use sync::{LoopbackAdapter, SyncAdapter, SyncBinding, SyncChannel, SyncError};
