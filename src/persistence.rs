//! Persistence adapter
//!
//! Narrow get/set contract over a key/value store, plus typed helpers for
//! the three values the app keeps:
//! - `quotes` (durable): JSON array of every quote
//! - `lastCategoryFilter` (durable): `"all"` or a category name
//! - `lastViewedQuote` (session): JSON of the last displayed quote

use std::sync::Arc;
use tracing::warn;

use crate::error::StorageError;
use crate::logic::selector::Filter;
use crate::model::quote::Quote;

pub const QUOTES_KEY: &str = "quotes";
pub const FILTER_KEY: &str = "lastCategoryFilter";
pub const LAST_VIEWED_KEY: &str = "lastViewedQuote";

/// Opaque string key/value persistence
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Durable and session-scoped stores behind one handle
#[derive(Clone)]
pub struct Persistence {
    durable: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(durable: Arc<dyn KeyValueStore>, session: Arc<dyn KeyValueStore>) -> Self {
        Self { durable, session }
    }

    /// Load the persisted quote list
    ///
    /// Returns `None` when nothing is stored or the stored value is unreadable,
    /// so the caller falls back to the built-in defaults.
    pub fn load_quotes(&self) -> Result<Option<Vec<Quote>>, StorageError> {
        let Some(raw) = self.durable.get(QUOTES_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Vec<Quote>>(&raw) {
            Ok(quotes) => Ok(Some(quotes)),
            Err(e) => {
                warn!("Ignoring unreadable persisted quotes: {}", e);
                Ok(None)
            }
        }
    }

    pub fn save_quotes(&self, quotes: &[Quote]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(quotes)?;
        self.durable.set(QUOTES_KEY, &raw)
    }

    /// Missing preference means "all"
    pub fn load_filter(&self) -> Result<Filter, StorageError> {
        Ok(self
            .durable
            .get(FILTER_KEY)?
            .map(|raw| Filter::from_stored(&raw))
            .unwrap_or_default())
    }

    pub fn save_filter(&self, filter: &Filter) -> Result<(), StorageError> {
        self.durable.set(FILTER_KEY, filter.as_stored())
    }

    pub fn load_last_viewed(&self) -> Result<Option<Quote>, StorageError> {
        let Some(raw) = self.session.get(LAST_VIEWED_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Quote>(&raw) {
            Ok(quote) => Ok(Some(quote)),
            Err(e) => {
                warn!("Ignoring unreadable last viewed quote: {}", e);
                Ok(None)
            }
        }
    }

    pub fn save_last_viewed(&self, quote: &Quote) -> Result<(), StorageError> {
        let raw = serde_json::to_string(quote)?;
        self.session.set(LAST_VIEWED_KEY, &raw)
    }
}
