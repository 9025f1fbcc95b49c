//! Domain errors
//!
//! Every failure in the quote pipeline degrades to "no-op plus status
//! message", so none of these are fatal once the app is running.

use thiserror::Error;

use crate::model::quote::Field;

/// Rejected user input on the add path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(Field),
}

/// Failure of the key/value persistence layer
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to prepare storage directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a quote store mutation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to persist quotes: {0}")]
    Storage(#[from] StorageError),
}

/// Failure of an import or export
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("failed to access file: {0}")]
    Io(#[from] std::io::Error),

    #[error("import is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("invalid import format: {0}")]
    Format(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failure talking to the remote quote source
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("fetch failed: {0}")]
    FetchFailed(#[source] anyhow::Error),

    #[error("publish failed: {0}")]
    PublishFailed(#[source] anyhow::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Nothing in the store matches the active filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("no quotes in this category")]
    NoMatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field_message_names_field() {
        let err = ValidationError::EmptyField(Field::Category);
        assert_eq!(err.to_string(), "category must not be empty");
    }

    #[test]
    fn test_store_error_is_transparent_for_validation() {
        let err: StoreError = ValidationError::EmptyField(Field::Text).into();
        assert_eq!(err.to_string(), "quote text must not be empty");
    }

    #[test]
    fn test_parse_error_wraps_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = TransferError::Parse(serde_err);
        assert!(err.to_string().starts_with("import is not valid JSON"));
    }
}
