use crate::utils::error::DeliveryError;

/// What happened when a report was handed to the notification channel.
///
/// The rendered document is always retained so a caller can fall back to
/// printing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryResult {
    pub configured: bool,
    pub succeeded: bool,
    pub error: Option<DeliveryError>,
    pub document: String,
}

impl DeliveryResult {
    pub fn unconfigured(document: impl Into<String>) -> Self {
        Self {
            configured: false,
            succeeded: false,
            error: None,
            document: document.into(),
        }
    }

    pub fn delivered(document: impl Into<String>) -> Self {
        Self {
            configured: true,
            succeeded: true,
            error: None,
            document: document.into(),
        }
    }

    pub fn rejected(document: impl Into<String>, error: DeliveryError) -> Self {
        Self {
            configured: true,
            succeeded: false,
            error: Some(error),
            document: document.into(),
        }
    }

    /// True when the document did not reach the channel and must be surfaced elsewhere.
    pub fn needs_fallback(&self) -> bool {
        !self.succeeded
    }
}
