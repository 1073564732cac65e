use crate::extractor::ValueExtractor;
use crate::fetcher::ContentFetcher;
use crate::models::{ExtractionOutcome, ItemConfig};

/// Runs fetch then extract for a single configured item.
///
/// `process` never fails: a source that cannot be fetched becomes an outcome
/// carrying the error, and extraction is skipped for it.
pub struct ItemProcessor<F, X> {
    fetcher: F,
    extractor: X,
}

impl<F, X> ItemProcessor<F, X>
where
    F: ContentFetcher,
    X: ValueExtractor,
{
    pub fn new(fetcher: F, extractor: X) -> Self {
        Self { fetcher, extractor }
    }

    pub async fn process(&self, item: &ItemConfig) -> ExtractionOutcome {
        let content = match self.fetcher.fetch(&item.source).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to fetch {} from {}: {}", item.name, item.source, e);
                return ExtractionOutcome::failed(item.name.clone(), e);
            }
        };

        let value = self.extractor.extract(&content, &item.selector);
        tracing::debug!("{} [{}] -> {}", item.name, item.selector, value);
        ExtractionOutcome::extracted(item.name.clone(), value)
    }

    #[cfg(test)]
    pub(crate) fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
