//! Filtered random selection
//!
//! Pure functions for choosing a quote from the subset matching a filter,
//! and for stepping the filter through the available categories.

use rand::Rng;

use crate::error::SelectError;
use crate::model::quote::Quote;

const ALL_SENTINEL: &str = "all";

/// Category filter: everything, or one exact category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Parse the persisted form (`"all"` or a category name)
    pub fn from_stored(raw: &str) -> Self {
        if raw == ALL_SENTINEL || raw.is_empty() {
            Filter::All
        } else {
            Filter::Category(raw.to_string())
        }
    }

    pub fn as_stored(&self) -> &str {
        match self {
            Filter::All => ALL_SENTINEL,
            Filter::Category(c) => c,
        }
    }

    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => quote.category == *c,
        }
    }

    /// Display label used by the category list
    pub fn label(&self) -> &str {
        match self {
            Filter::All => "All Categories",
            Filter::Category(c) => c,
        }
    }

    /// Keep a restored filter only if its category still exists
    pub fn validated(self, categories: &[String]) -> Self {
        match &self {
            Filter::Category(c) if !categories.contains(c) => Filter::All,
            _ => self,
        }
    }

    /// Position in the list `All, categories...`
    ///
    /// Unknown categories map to 0 (All).
    pub fn position(&self, categories: &[String]) -> usize {
        match self {
            Filter::All => 0,
            Filter::Category(c) => categories
                .iter()
                .position(|cat| cat == c)
                .map(|idx| idx + 1)
                .unwrap_or(0),
        }
    }

    fn at_position(position: usize, categories: &[String]) -> Self {
        if position == 0 {
            Filter::All
        } else {
            categories
                .get(position - 1)
                .map(|c| Filter::Category(c.clone()))
                .unwrap_or(Filter::All)
        }
    }

    /// Next filter in `All -> c1 -> c2 -> ... -> All`
    pub fn cycle_next(&self, categories: &[String]) -> Self {
        let total = categories.len() + 1;
        Self::at_position((self.position(categories) + 1) % total, categories)
    }

    /// Previous filter in `All -> cN -> ... -> c1 -> All`
    pub fn cycle_prev(&self, categories: &[String]) -> Self {
        let total = categories.len() + 1;
        Self::at_position((self.position(categories) + total - 1) % total, categories)
    }
}

/// Uniform integer source in `[0, len)`
pub trait RandomSource {
    /// Callers never pass `len == 0`
    fn next_index(&mut self, len: usize) -> usize;
}

/// Thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Pick one quote uniformly at random from those matching `filter`
pub fn pick(
    quotes: &[Quote],
    filter: &Filter,
    rng: &mut dyn RandomSource,
) -> Result<Quote, SelectError> {
    let matching: Vec<&Quote> = quotes.iter().filter(|q| filter.matches(q)).collect();

    if matching.is_empty() {
        return Err(SelectError::NoMatch);
    }

    let idx = rng.next_index(matching.len()).min(matching.len() - 1);
    Ok(matching[idx].clone())
}

/// Quote to show at startup
///
/// Reuses the last viewed quote if it still exists and matches `filter`,
/// otherwise draws a fresh one. `None` means nothing matches.
pub fn resume_or_pick(
    quotes: &[Quote],
    filter: &Filter,
    last_viewed: Option<Quote>,
    rng: &mut dyn RandomSource,
) -> Option<Quote> {
    if let Some(quote) = last_viewed {
        if filter.matches(&quote) && quotes.contains(&quote) {
            return Some(quote);
        }
    }

    pick(quotes, filter, rng).ok()
}
