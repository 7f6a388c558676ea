use crate::error::AppError;
use crate::models::{HeadlineRecord, SourceDescriptor};
use crate::traits::{Extractor, Fetcher};

/// Events emitted while aggregating, one stream per source.
#[derive(Debug, Clone)]
pub enum AggregateEvent<'a> {
    SourceStarted {
        name: &'a str,
    },
    SourceCompleted {
        name: &'a str,
        headlines: usize,
    },
    SourceFailed {
        name: &'a str,
        error: &'a AppError,
    },
}

/// Trait for receiving aggregation events (decoupled diagnostics).
pub trait AggregateReporter: Send + Sync {
    fn report(&self, event: AggregateEvent<'_>) {
        let _ = event;
    }
}

/// Reporter that uses the `tracing` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAggregateReporter;

impl AggregateReporter for TracingAggregateReporter {
    fn report(&self, event: AggregateEvent<'_>) {
        match event {
            AggregateEvent::SourceStarted { name } => {
                tracing::info!(source = %name, "Scraping source");
            }
            AggregateEvent::SourceCompleted { name, headlines } => {
                tracing::info!(source = %name, %headlines, "Source scraped");
            }
            AggregateEvent::SourceFailed { name, error } => {
                tracing::warn!(source = %name, %error, "Source failed");
            }
        }
    }
}

/// Drives fetch → extract across every configured source.
///
/// Generic over the fetcher and extractor so the pipeline runs without real
/// HTTP in tests. Sources are processed strictly in order, one at a time.
pub struct Aggregator<F, X, R>
where
    F: Fetcher,
    X: Extractor,
    R: AggregateReporter,
{
    fetcher: F,
    extractor: X,
    reporter: R,
}

impl<F, X> Aggregator<F, X, TracingAggregateReporter>
where
    F: Fetcher,
    X: Extractor,
{
    pub fn new(fetcher: F, extractor: X) -> Self {
        Self::with_reporter(fetcher, extractor, TracingAggregateReporter)
    }
}

impl<F, X, R> Aggregator<F, X, R>
where
    F: Fetcher,
    X: Extractor,
    R: AggregateReporter,
{
    pub fn with_reporter(fetcher: F, extractor: X, reporter: R) -> Self {
        Self {
            fetcher,
            extractor,
            reporter,
        }
    }

    /// Collect headlines from all sources.
    ///
    /// A source that fails at any stage is reported and contributes nothing;
    /// the remaining sources are still processed. The result is ordered by
    /// source, then by match order within each page.
    pub async fn aggregate(&self, sources: &[SourceDescriptor]) -> Vec<HeadlineRecord> {
        let mut headlines = Vec::new();

        for source in sources {
            let name = source.label();
            self.reporter.report(AggregateEvent::SourceStarted { name });

            match self.collect_source(source).await {
                Ok(records) => {
                    self.reporter.report(AggregateEvent::SourceCompleted {
                        name,
                        headlines: records.len(),
                    });
                    headlines.extend(records);
                }
                Err(error) => {
                    self.reporter
                        .report(AggregateEvent::SourceFailed { name, error: &error });
                }
            }
        }

        tracing::info!(
            sources = sources.len(),
            headlines = headlines.len(),
            "Aggregation complete"
        );
        headlines
    }

    /// Fetch and extract a single source.
    pub async fn collect_source(
        &self,
        source: &SourceDescriptor,
    ) -> Result<Vec<HeadlineRecord>, AppError> {
        let name = source.name()?;
        let url = source.url()?;
        let selector = source.selector()?;

        let html = self.fetcher.fetch(url).await?;
        tracing::debug!(source = %name, bytes = html.len(), "Fetched page");

        let texts = self.extractor.extract(&html, selector)?;

        Ok(texts
            .into_iter()
            .filter(|text| !text.trim().is_empty())
            .map(|text| HeadlineRecord::new(name, text.trim()))
            .collect())
    }
}
