//! UI state transition logic
//!
//! Pure functions for toast timing and quote display text.

use crate::model::quote::Quote;

/// Toasts stay up this long before auto-dismissing
pub const TOAST_DURATION_MS: u128 = 3000;

/// Shown instead of a quote when the filter matches nothing
pub const NO_MATCH_PLACEHOLDER: &str = "No quotes in this category.";

/// Check if a toast shown `elapsed_ms` ago should be dismissed
///
/// # Examples
/// ```
/// use quotetui::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(100));
/// assert!(should_dismiss_toast(3000));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Quote body and caption as shown in the main pane
pub fn quote_lines(quote: &Quote) -> (String, String) {
    (
        format!("\"{}\"", quote.text),
        format!("Category: {}", quote.category),
    )
}

/// Notification text after a sync added quotes
pub fn sync_notification(added: usize) -> String {
    format!("{} quotes synced from server!", added)
}
