use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a source could not be turned into text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("HTTP status {code}")]
    HttpStatus { code: u16 },

    #[error("request failed: {0}")]
    Request(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl FetchError {
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return FetchError::HttpStatus { code: status.as_u16() };
        }
        if err.is_timeout() {
            FetchError::Request(format!("timed out: {}", err))
        } else if err.is_connect() {
            FetchError::Request(format!("connection failed: {}", err))
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::Io(err.to_string())
    }
}

/// The notification channel was reachable in principle but the message did not go out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("invalid address: {0}")]
    Address(String),

    #[error("could not build message: {0}")]
    Message(String),

    #[error("SMTP transport failed: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
