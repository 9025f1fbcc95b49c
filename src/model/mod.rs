//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **UiModel**: Filter, displayed quote, dialogs, toasts
//! - **SyncModel**: Background sync status
//!
//! The quote list itself lives in `QuoteStore`; the model only holds the
//! derived view (categories, count) refreshed after each mutation.

pub mod quote;
pub mod sync;
pub mod types;
pub mod ui;

pub use quote::Quote;
pub use sync::{SyncModel, SyncStatus};
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// UI preferences and popups
    pub ui: UiModel,

    /// Background sync state
    pub sync: SyncModel,
}

impl Model {
    pub fn new(vim_mode: bool, offline: bool) -> Self {
        Self {
            ui: UiModel::new(vim_mode),
            sync: SyncModel::new(offline),
        }
    }

    /// Refresh the derived store view after a mutation
    pub fn set_store_view(&mut self, categories: Vec<String>, quote_count: usize) {
        self.ui.categories = categories;
        self.ui.quote_count = quote_count;
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new(false, false);
        assert!(model.ui.categories.is_empty());
        assert_eq!(model.sync.status, SyncStatus::Idle);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(false, true);
        let cloned = model.clone();
        assert_eq!(cloned.sync.status, SyncStatus::Offline);
    }

    #[test]
    fn test_set_store_view() {
        let mut model = Model::new(false, false);
        model.set_store_view(vec!["Tech".to_string()], 3);
        assert_eq!(model.ui.categories, vec!["Tech".to_string()]);
        assert_eq!(model.ui.quote_count, 3);
    }
}
