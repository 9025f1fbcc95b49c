//! External Services
//!
//! This module contains services that interact with external systems:
//! - sync: Periodic fetch-and-merge against the remote quote source

pub mod sync;

// Re-export commonly used types for convenience
pub use sync::{spawn_sync_service, SyncCommand, SyncEngine, SyncEvent, SyncReport};
