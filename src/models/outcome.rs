use std::fmt;

use crate::utils::error::FetchError;

/// Text rendered for a selector that matched nothing.
pub const NOT_FOUND_TEXT: &str = "Not found";

/// Result of evaluating a selector against fetched content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedValue {
    Found(String),
    NotFound,
}

impl ExtractedValue {
    pub fn is_found(&self) -> bool {
        matches!(self, ExtractedValue::Found(_))
    }

    pub fn as_found(&self) -> Option<&str> {
        match self {
            ExtractedValue::Found(text) => Some(text),
            ExtractedValue::NotFound => None,
        }
    }
}

impl fmt::Display for ExtractedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractedValue::Found(text) => f.write_str(text),
            ExtractedValue::NotFound => f.write_str(NOT_FOUND_TEXT),
        }
    }
}

/// The per-item result of a run. Always produced, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOutcome {
    name: String,
    value: ExtractedValue,
    error: Option<FetchError>,
}

impl ExtractionOutcome {
    pub fn extracted(name: impl Into<String>, value: ExtractedValue) -> Self {
        Self {
            name: name.into(),
            value,
            error: None,
        }
    }

    /// Content never arrived, so there was nothing to extract from.
    pub fn failed(name: impl Into<String>, error: FetchError) -> Self {
        Self {
            name: name.into(),
            value: ExtractedValue::NotFound,
            error: Some(error),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &ExtractedValue {
        &self.value
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// The text shown after the item name in a report line.
    pub fn summary(&self) -> String {
        match &self.error {
            Some(err) => format!("Error ({})", err),
            None => self.value.to_string(),
        }
    }
}
