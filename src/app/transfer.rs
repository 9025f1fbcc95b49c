//! JSON import/export via the path prompt

use std::path::PathBuf;

use quotetui::logic::transfer::{export_to_file, import_from_file};
use quotetui::model::{Dialog, PathPrompt, TransferAction};
use tracing::warn;

use crate::App;

impl App {
    pub(crate) fn open_transfer_prompt(&mut self, action: TransferAction) {
        self.model.ui.dialog = Some(Dialog::Path(PathPrompt {
            action,
            input: self.export_path.clone(),
        }));
    }

    /// Run the prompt's action against the entered path
    ///
    /// Rejected imports leave the store untouched and keep the prompt open.
    pub(crate) fn run_transfer(&mut self) {
        let Some(Dialog::Path(prompt)) = &self.model.ui.dialog else {
            return;
        };
        let action = prompt.action;
        let input = prompt.input.trim().to_string();

        if input.is_empty() {
            self.model.ui.show_error("file path must not be empty");
            return;
        }
        let path = PathBuf::from(&input);

        match action {
            TransferAction::Export => match export_to_file(&self.store, &path) {
                Ok(count) => {
                    self.model.ui.dialog = None;
                    self.model
                        .show_toast(format!("Exported {} quotes to {}", count, input));
                }
                Err(e) => {
                    warn!("Export to {:?} failed: {}", path, e);
                    self.model.ui.show_error(e);
                }
            },
            TransferAction::Import => match import_from_file(&self.store, &path) {
                Ok(added) => {
                    self.model.ui.dialog = None;
                    self.refresh_store_view();
                    self.show_quote_if_empty();
                    self.model
                        .show_toast(format!("Quotes imported successfully! {} new", added));
                }
                Err(e) => {
                    warn!("Import from {:?} failed: {}", path, e);
                    self.model.ui.show_error(e);
                }
            },
        }
    }
}
