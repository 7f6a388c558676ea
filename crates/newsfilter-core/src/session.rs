//! One interactive pass: load or fetch headlines, filter, display, export.
//!
//! ```text
//! cache hit  ─► load cache ─┐
//!                           ├─► filter ─► match?    ─► display ─► confirm? ─► export
//! cache miss ─► aggregate ──┘            no match  ─► "No matching headlines found."
//!               └─► save cache
//! ```

use std::io::Write;
use std::path::PathBuf;

use crate::aggregate::{AggregateReporter, Aggregator};
use crate::error::AppError;
use crate::filter::filter_headlines;
use crate::models::{HeadlineOrigin, SourceDescriptor};
use crate::report::display;
use crate::traits::{Decisions, Exporter, Extractor, Fetcher, HeadlineCache};

/// What a session did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub origin: HeadlineOrigin,
    pub total: usize,
    pub matched: usize,
    pub exported: Option<PathBuf>,
}

/// Run the whole pipeline once against injected collaborators.
///
/// Source failures are absorbed by the aggregator. Cache, export and prompt
/// failures end the session with an error.
pub async fn run_session<F, X, R, C, E, D, W>(
    aggregator: &Aggregator<F, X, R>,
    sources: &[SourceDescriptor],
    cache: &C,
    exporter: &E,
    decisions: &D,
    out: &mut W,
) -> Result<SessionOutcome, AppError>
where
    F: Fetcher,
    X: Extractor,
    R: AggregateReporter,
    C: HeadlineCache,
    E: Exporter,
    D: Decisions,
    W: Write,
{
    let (headlines, origin) = match cache.load().await? {
        Some(cached) => {
            writeln!(out, "Loading headlines from cache...")?;
            tracing::info!(count = cached.len(), "Using cached headlines");
            (cached, HeadlineOrigin::Cache)
        }
        None => {
            writeln!(out, "Scraping news sites...")?;
            let fetched = aggregator.aggregate(sources).await;
            cache.save(&fetched).await?;
            (fetched, HeadlineOrigin::Fetched)
        }
    };

    let keyword = decisions.keyword()?;
    let keyword = keyword.trim();
    let filtered = filter_headlines(&headlines, keyword);
    tracing::info!(%keyword, matched = filtered.len(), "Filtered headlines");

    let mut outcome = SessionOutcome {
        origin,
        total: headlines.len(),
        matched: filtered.len(),
        exported: None,
    };

    if filtered.is_empty() {
        writeln!(out, "No matching headlines found.")?;
        return Ok(outcome);
    }

    display(out, &filtered)?;

    if decisions.confirm_export()? {
        let path = exporter.export(&filtered).await?;
        writeln!(out, "Exported to {}", path.display())?;
        outcome.exported = Some(path);
    }

    Ok(outcome)
}
