//! Quote store
//!
//! The single source of truth for quotes. Every mutation goes through
//! `add` or `merge_unique`, and the persisted snapshot is written while the
//! lock is still held, so concurrent mutations can never persist a stale
//! copy over a newer one.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::error::{StorageError, StoreError};
use crate::model::quote::{default_quotes, Quote};
use crate::persistence::Persistence;

#[derive(Clone)]
pub struct QuoteStore {
    quotes: Arc<Mutex<Vec<Quote>>>,
    persistence: Persistence,
}

impl QuoteStore {
    /// Hydrate from persistence, seeding the built-in defaults if nothing is stored
    pub fn load(persistence: Persistence) -> Result<Self, StorageError> {
        let quotes = match persistence.load_quotes()? {
            Some(stored) => {
                let quotes = revalidate(stored);
                info!("Loaded {} persisted quotes", quotes.len());
                quotes
            }
            None => {
                let defaults = default_quotes();
                persistence.save_quotes(&defaults)?;
                info!("No persisted quotes, seeded {} defaults", defaults.len());
                defaults
            }
        };

        Ok(Self {
            quotes: Arc::new(Mutex::new(quotes)),
            persistence,
        })
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Quote>> {
        self.quotes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Validate, append and persist a single quote
    pub fn add(&self, text: &str, category: &str) -> Result<Quote, StoreError> {
        let quote = Quote::new(text, category)?;

        let mut quotes = self.lock();
        quotes.push(quote.clone());

        if let Err(e) = self.persistence.save_quotes(&quotes) {
            quotes.pop();
            warn!("Rolled back add, persist failed: {}", e);
            return Err(e.into());
        }

        debug!("Added quote in category '{}'", quote.category);
        Ok(quote)
    }

    /// Append every candidate whose text is not already present
    ///
    /// Duplicates inside `candidates` are also skipped. Returns how many
    /// quotes were actually added.
    pub fn merge_unique(&self, candidates: Vec<Quote>) -> Result<usize, StoreError> {
        let mut quotes = self.lock();
        let before = quotes.len();

        let mut seen: HashSet<String> = quotes.iter().map(|q| q.text.clone()).collect();
        for candidate in candidates {
            if seen.insert(candidate.text.clone()) {
                quotes.push(candidate);
            }
        }

        let added = quotes.len() - before;
        if added == 0 {
            return Ok(0);
        }

        if let Err(e) = self.persistence.save_quotes(&quotes) {
            quotes.truncate(before);
            warn!("Rolled back merge of {} quotes, persist failed: {}", added, e);
            return Err(e.into());
        }

        debug!("Merged {} new quotes", added);
        Ok(added)
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let quotes = self.lock();
        let mut seen = HashSet::new();
        quotes
            .iter()
            .filter(|q| seen.insert(q.category.as_str()))
            .map(|q| q.category.clone())
            .collect()
    }

    pub fn snapshot(&self) -> Vec<Quote> {
        self.lock().clone()
    }

    pub fn contains(&self, quote: &Quote) -> bool {
        self.lock().iter().any(|q| q == quote)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }
}

/// Re-run validation on stored quotes, dropping any that no longer pass
fn revalidate(stored: Vec<Quote>) -> Vec<Quote> {
    let total = stored.len();
    let quotes: Vec<Quote> = stored
        .into_iter()
        .filter_map(|q| Quote::new(&q.text, &q.category).ok())
        .collect();

    if quotes.len() < total {
        warn!("Dropped {} invalid persisted quotes", total - quotes.len());
    }
    quotes
}
