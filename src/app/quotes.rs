//! Quote view actions
//!
//! - Draw the next random quote for the active filter
//! - Change the category filter (persisted across runs)
//! - Submit the add-quote form and push the new quote to the server

use quotetui::error::{SelectError, StoreError, ValidationError};
use quotetui::logic::selector::{pick, Filter};
use quotetui::model::{AddQuoteForm, Dialog};
use quotetui::services::SyncCommand;
use tracing::{debug, warn};

use crate::App;

impl App {
    /// Refresh the derived category list and count after a store mutation
    pub(crate) fn refresh_store_view(&mut self) {
        let categories = self.store.categories();
        let count = self.store.len();
        self.model.set_store_view(categories, count);
    }

    /// Replace the displayed quote with a fresh random one
    ///
    /// Shows the placeholder when nothing matches the filter.
    pub(crate) fn show_next_quote(&mut self) {
        match pick(&self.store.snapshot(), &self.model.ui.filter, &mut self.rng) {
            Ok(quote) => {
                if let Err(e) = self.store.persistence().save_last_viewed(&quote) {
                    warn!("Failed to save last viewed quote: {}", e);
                }
                self.model.ui.current_quote = Some(quote);
            }
            Err(SelectError::NoMatch) => {
                debug!("No quotes match {:?}", self.model.ui.filter);
                self.model.ui.current_quote = None;
            }
        }
    }

    /// Placeholder is only replaced when something new may match
    pub(crate) fn show_quote_if_empty(&mut self) {
        if self.model.ui.current_quote.is_none() {
            self.show_next_quote();
        }
    }

    pub(crate) fn set_filter(&mut self, filter: Filter) {
        if let Err(e) = self.store.persistence().save_filter(&filter) {
            warn!("Failed to save category filter: {}", e);
        }
        self.model.ui.filter = filter;
        self.show_next_quote();
    }

    pub(crate) fn next_filter(&mut self) {
        let next = self.model.ui.filter.cycle_next(&self.model.ui.categories);
        self.set_filter(next);
    }

    pub(crate) fn prev_filter(&mut self) {
        let prev = self.model.ui.filter.cycle_prev(&self.model.ui.categories);
        self.set_filter(prev);
    }

    pub(crate) fn open_add_form(&mut self) {
        self.model.ui.dialog = Some(Dialog::AddQuote(AddQuoteForm::default()));
    }

    /// Validate and store the form contents
    ///
    /// On a validation failure the form stays open with its input intact and
    /// focus moves to the offending field.
    pub(crate) fn submit_add_form(&mut self) {
        let Some(Dialog::AddQuote(form)) = &self.model.ui.dialog else {
            return;
        };
        let (text, category) = (form.text.clone(), form.category.clone());

        match self.store.add(&text, &category) {
            Ok(quote) => {
                self.model.ui.dialog = None;
                self.refresh_store_view();
                self.show_quote_if_empty();

                match &self.sync_tx {
                    Some(tx) => {
                        let _ = tx.send(SyncCommand::Publish(quote));
                        self.model.show_toast("Quote added and pushed to server!".to_string());
                    }
                    None => self.model.show_toast("Quote added!".to_string()),
                }
            }
            Err(StoreError::Validation(err)) => {
                let ValidationError::EmptyField(field) = &err;
                if let Some(Dialog::AddQuote(form)) = &mut self.model.ui.dialog {
                    form.focus_on(*field);
                }
                self.model.ui.show_error(err);
            }
            Err(e) => {
                warn!("Failed to add quote: {}", e);
                self.model.ui.show_error(e);
            }
        }
    }

    /// Ask the sync service for an immediate run
    pub(crate) fn request_sync(&mut self) {
        match &self.sync_tx {
            Some(tx) => {
                let _ = tx.send(SyncCommand::RunNow);
            }
            None => self.model.ui.show_error("Sync is disabled in offline mode"),
        }
    }
}
