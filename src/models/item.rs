use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::SourceReference;

/// One monitored target as read from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ItemConfig {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[serde(alias = "url")]
    #[validate(custom(function = "validate_source"))]
    pub source: SourceReference,

    #[validate(length(min = 1, message = "selector must not be empty"))]
    pub selector: String,
}

impl ItemConfig {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<SourceReference>,
        selector: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            selector: selector.into(),
        }
    }
}

fn validate_source(source: &SourceReference) -> Result<(), ValidationError> {
    if source.as_str().trim().is_empty() {
        let mut err = ValidationError::new("empty_source");
        err.message = Some("source must not be empty".into());
        return Err(err);
    }
    Ok(())
}
