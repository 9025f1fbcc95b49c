//! Import/Export
//!
//! The file artifact is a bare JSON array of `{text, category}` objects,
//! UTF-8, with no schema version or metadata.
//!
//! Imports go through the same text-based dedup as sync, so importing an
//! export of the current store adds nothing.

use serde_json::Value;
use std::path::Path;
use tracing::info;

use crate::error::TransferError;
use crate::model::quote::Quote;
use crate::store::QuoteStore;

/// Serialize the whole store as a JSON array
pub fn export_all(store: &QuoteStore) -> Result<Vec<u8>, TransferError> {
    serde_json::to_vec(&store.snapshot()).map_err(|e| TransferError::Format(e.to_string()))
}

pub fn export_to_file(store: &QuoteStore, path: &Path) -> Result<usize, TransferError> {
    let bytes = export_all(store)?;
    std::fs::write(path, bytes)?;

    let count = store.len();
    info!("Exported {} quotes to {}", count, path.display());
    Ok(count)
}

/// Parse `bytes` and merge every quote into the store
///
/// The whole file is rejected, leaving the store untouched, if it is not
/// JSON, not an array, or any element is not a valid quote.
pub fn import_all(store: &QuoteStore, bytes: &[u8]) -> Result<usize, TransferError> {
    let candidates = parse_import(bytes)?;
    let added = store.merge_unique(candidates)?;
    Ok(added)
}

pub fn import_from_file(store: &QuoteStore, path: &Path) -> Result<usize, TransferError> {
    let bytes = std::fs::read(path)?;
    let added = import_all(store, &bytes)?;

    info!("Imported {} new quotes from {}", added, path.display());
    Ok(added)
}

fn parse_import(bytes: &[u8]) -> Result<Vec<Quote>, TransferError> {
    let value: Value = serde_json::from_slice(bytes).map_err(TransferError::Parse)?;

    let Value::Array(items) = value else {
        return Err(TransferError::Format(
            "expected a JSON array of quotes".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| parse_item(idx, &item))
        .collect()
}

fn parse_item(idx: usize, item: &Value) -> Result<Quote, TransferError> {
    let text = str_field(item, idx, "text")?;
    let category = str_field(item, idx, "category")?;

    Quote::new(text, category)
        .map_err(|e| TransferError::Format(format!("entry {}: {}", idx, e)))
}

fn str_field<'a>(item: &'a Value, idx: usize, name: &str) -> Result<&'a str, TransferError> {
    item.get(name).and_then(Value::as_str).ok_or_else(|| {
        TransferError::Format(format!("entry {} is missing string field '{}'", idx, name))
    })
}
