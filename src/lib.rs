pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod models;
pub mod notifier;
pub mod pipeline;
pub mod processor;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use crate::config::AppConfig;
pub use crate::extractor::{CssExtractor, ValueExtractor};
pub use crate::fetcher::{ContentFetcher, SourceFetcher};
pub use crate::notifier::{EmailNotifier, Notifier};
pub use crate::pipeline::{PipelineRunner, RunMode, RunSummary};
pub use crate::utils::error::{AppError, Result};
