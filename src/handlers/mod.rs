//! Event Handlers
//!
//! - keyboard: User keyboard input
//! - sync: Events from the background sync service
//!
//! Handlers take &mut App and translate events into App actions.

pub mod keyboard;
pub mod sync;

// Re-export for convenience
pub use keyboard::handle_key;
pub use sync::handle_sync_event;
