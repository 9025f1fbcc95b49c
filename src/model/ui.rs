//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! the active filter, the displayed quote, dialogs and toasts.

use std::time::Instant;

use super::types::Dialog;
use crate::logic::selector::Filter;
use crate::model::quote::Quote;

#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // QUOTE VIEW
    // ============================================
    /// Active category filter
    pub filter: Filter,

    /// Categories as of the last store mutation, first-seen order
    pub categories: Vec<String>,

    /// Quote in the main pane (None renders the placeholder)
    pub current_quote: Option<Quote>,

    /// Store size as of the last store mutation
    pub quote_count: usize,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Add-quote form or path prompt
    pub dialog: Option<Dialog>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            filter: Filter::All,
            categories: Vec::new(),
            current_quote: None,
            quote_count: 0,
            dialog: None,
            toast_message: None,
            vim_mode,
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Toasts prefixed with "Error:" are styled as failures
    pub fn show_error(&mut self, message: impl std::fmt::Display) {
        self.show_toast(format!("Error: {}", message));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    /// Index of the active filter in the category list (0 is "All")
    pub fn filter_position(&self) -> usize {
        self.filter.position(&self.categories)
    }
}
