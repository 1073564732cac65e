use futures::stream::{self, StreamExt};
use std::io::Write;

use crate::extractor::ValueExtractor;
use crate::fetcher::ContentFetcher;
use crate::models::{DeliveryResult, ExtractionOutcome, ItemConfig, Report};
use crate::notifier::Notifier;
use crate::processor::ItemProcessor;
use crate::report::ReportBuilder;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Print the report, never touch the notification channel.
    ReportOnly,
    Deliver,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report: Report,
    /// `None` in report-only mode.
    pub delivery: Option<DeliveryResult>,
}

/// Fetch, extract, aggregate and deliver for a whole configuration.
pub struct PipelineRunner<F, X, N> {
    processor: ItemProcessor<F, X>,
    notifier: N,
    builder: ReportBuilder,
    concurrency: usize,
    subject: String,
}

impl<F, X, N> PipelineRunner<F, X, N>
where
    F: ContentFetcher,
    X: ValueExtractor,
    N: Notifier,
{
    pub fn new(fetcher: F, extractor: X, notifier: N) -> Self {
        Self {
            processor: ItemProcessor::new(fetcher, extractor),
            notifier,
            builder: ReportBuilder::new(),
            concurrency: 1,
            subject: "Daily Price Report".to_string(),
        }
    }

    /// Maximum number of items in flight. 1 processes items one after another.
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Outcomes come back in input order whatever the concurrency.
    pub async fn process_all(&self, items: &[ItemConfig]) -> Vec<ExtractionOutcome> {
        stream::iter(items)
            .map(|item| self.processor.process(item))
            .buffered(self.concurrency)
            .collect()
            .await
    }

    /// Runs every item and writes the report to `sink` whenever it is not
    /// delivered. Per-item failures never make this fail; only writing to the
    /// sink can.
    pub async fn run<W: Write>(
        &self,
        items: &[ItemConfig],
        mode: RunMode,
        sink: &mut W,
    ) -> Result<RunSummary> {
        tracing::info!(
            "Checking {} product(s) with concurrency {}",
            items.len(),
            self.concurrency
        );

        let outcomes = self.process_all(items).await;
        let report = self.builder.build(outcomes);
        let body = report.render();

        tracing::info!(
            "Built report with {} line(s), {} fetch failure(s)",
            report.outcomes().len(),
            report.failures()
        );

        let delivery = match mode {
            RunMode::ReportOnly => {
                writeln!(sink, "{}", body)?;
                None
            }
            RunMode::Deliver => {
                let result = self.notifier.deliver(&self.subject, &body).await;
                if result.needs_fallback() {
                    if result.configured {
                        tracing::warn!(
                            "Delivery via {} failed; printing report instead",
                            self.notifier.name()
                        );
                    }
                    writeln!(sink, "{}", result.document)?;
                }
                Some(result)
            }
        };

        Ok(RunSummary { report, delivery })
    }
}
