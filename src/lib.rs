//! Quote TUI Library
//!
//! Exposes modules for testing

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod persistence;
pub mod services;
pub mod store;
