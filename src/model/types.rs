//! Shared Model Types
//!
//! Dialog state for the add-quote form and the import/export path prompt.

use crate::model::quote::Field;

/// Add-quote form input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddQuoteForm {
    pub text: String,
    pub category: String,
    pub focus: Field,
}

impl Default for AddQuoteForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            category: String::new(),
            focus: Field::Text,
        }
    }
}

impl AddQuoteForm {
    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Text => &mut self.text,
            Field::Category => &mut self.category,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Text => Field::Category,
            Field::Category => Field::Text,
        };
    }

    /// Move focus to the field that failed validation
    pub fn focus_on(&mut self, field: Field) {
        self.focus = field;
    }
}

/// Which way a path prompt moves quotes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferAction {
    Import,
    Export,
}

impl TransferAction {
    pub fn title(&self) -> &'static str {
        match self {
            TransferAction::Import => "Import quotes from file",
            TransferAction::Export => "Export quotes to file",
        }
    }
}

/// File path prompt for import/export
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPrompt {
    pub action: TransferAction,
    pub input: String,
}

/// Modal dialogs
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dialog {
    AddQuote(AddQuoteForm),
    Path(PathPrompt),
}
