//! Quote data type
//!
//! A quote is a text/category pair. There is no identity field: two
//! quotes are the same for merge purposes when their `text` is equal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

/// Input field of a quote, used to name what failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Text,
    Category,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Text => write!(f, "quote text"),
            Field::Category => write!(f, "category"),
        }
    }
}

impl Quote {
    /// Build a quote from raw user input, trimming both fields
    ///
    /// Fails if either field is empty after trimming. Text is checked first.
    pub fn new(text: &str, category: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() {
            return Err(ValidationError::EmptyField(Field::Text));
        }
        if category.is_empty() {
            return Err(ValidationError::EmptyField(Field::Category));
        }

        Ok(Self {
            text: text.to_string(),
            category: category.to_string(),
        })
    }
}

/// Built-in quotes used when nothing has been persisted yet
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote {
            text: "The only way to do great work is to love what you do.".to_string(),
            category: "Motivation".to_string(),
        },
        Quote {
            text: "Innovation distinguishes between a leader and a follower.".to_string(),
            category: "Leadership".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let quote = Quote::new("  Stay hungry  ", "\tTech\n").unwrap();
        assert_eq!(quote.text, "Stay hungry");
        assert_eq!(quote.category, "Tech");
    }

    #[test]
    fn test_new_rejects_whitespace_text() {
        assert_eq!(
            Quote::new("   ", "Tech"),
            Err(ValidationError::EmptyField(Field::Text))
        );
    }

    #[test]
    fn test_new_rejects_empty_category() {
        assert_eq!(
            Quote::new("Stay hungry", ""),
            Err(ValidationError::EmptyField(Field::Category))
        );
    }

    #[test]
    fn test_serializes_as_text_and_category() {
        let quote = Quote::new("Stay hungry", "Tech").unwrap();
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json, serde_json::json!({"text": "Stay hungry", "category": "Tech"}));
    }

    #[test]
    fn test_default_quotes_are_valid() {
        for quote in default_quotes() {
            assert!(Quote::new(&quote.text, &quote.category).is_ok());
        }
    }
}
