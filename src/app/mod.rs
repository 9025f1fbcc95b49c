//! App action methods
//!
//! User actions that touch the store, split by concern:
//! - quotes: random selection, filter changes, adding quotes
//! - transfer: JSON import/export through the path prompt

pub mod quotes;
pub mod transfer;
