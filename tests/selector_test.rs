//! Tests for filtered random selection over a real store
//!
//! Example:
//! Store: [Motivation, Leadership defaults] + "Stay hungry" (Tech)
//! Filter "Tech" → always "Stay hungry"
//! Filter "Science" → NoMatch, placeholder shown

use std::sync::Arc;

use quotetui::cache::KvDb;
use quotetui::error::SelectError;
use quotetui::logic::selector::{pick, resume_or_pick, Filter, RandomSource, ThreadRandom};
use quotetui::model::quote::Quote;
use quotetui::persistence::Persistence;
use quotetui::store::QuoteStore;

/// Always returns the last index
struct Last;

impl RandomSource for Last {
    fn next_index(&mut self, len: usize) -> usize {
        len - 1
    }
}

fn store_with_tech() -> QuoteStore {
    let persistence = Persistence::new(
        Arc::new(KvDb::new_in_memory().unwrap()),
        Arc::new(KvDb::new_in_memory().unwrap()),
    );
    let store = QuoteStore::load(persistence).unwrap();
    store.add("Stay hungry", "Tech").unwrap();
    store
}

#[test]
fn test_category_filter_only_returns_that_category() {
    let store = store_with_tech();
    let filter = Filter::Category("Tech".to_string());

    for _ in 0..20 {
        let picked = pick(&store.snapshot(), &filter, &mut ThreadRandom).unwrap();
        assert_eq!(picked.text, "Stay hungry");
    }
}

#[test]
fn test_all_filter_reaches_every_quote() {
    let store = store_with_tech();
    let picked = pick(&store.snapshot(), &Filter::All, &mut Last).unwrap();
    assert_eq!(picked.category, "Tech");
}

#[test]
fn test_unknown_category_is_no_match() {
    let store = store_with_tech();
    let filter = Filter::Category("Science".to_string());

    assert_eq!(
        pick(&store.snapshot(), &filter, &mut ThreadRandom),
        Err(SelectError::NoMatch)
    );
}

#[test]
fn test_restored_filter_for_removed_category_falls_back() {
    let store = store_with_tech();
    let restored = Filter::from_stored("Science").validated(&store.categories());
    assert_eq!(restored, Filter::All);
}

#[test]
fn test_cycle_follows_first_seen_order() {
    let store = store_with_tech();
    let cats = store.categories();

    let mut filter = Filter::All;
    let mut seen = Vec::new();
    for _ in 0..cats.len() {
        filter = filter.cycle_next(&cats);
        seen.push(filter.label().to_string());
    }
    assert_eq!(seen, vec!["Motivation", "Leadership", "Tech"]);
    assert_eq!(filter.cycle_next(&cats), Filter::All);
}

#[test]
fn test_startup_resumes_last_viewed() {
    let store = store_with_tech();
    let last = Quote {
        text: "Stay hungry".to_string(),
        category: "Tech".to_string(),
    };

    let shown = resume_or_pick(&store.snapshot(), &Filter::All, Some(last.clone()), &mut Last);
    assert_eq!(shown, Some(last));
}
