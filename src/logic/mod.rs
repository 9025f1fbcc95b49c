//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Classification of remote call failures
//! - selector: Category filter and filtered random selection
//! - transfer: JSON import/export of the quote store
//! - ui: Toast timing and display text

pub mod errors;
pub mod selector;
pub mod transfer;
pub mod ui;
