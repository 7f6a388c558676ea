use std::future::Future;
use std::path::PathBuf;

use crate::error::AppError;
use crate::models::HeadlineRecord;

/// Fetches raw HTML content from a URL.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// Pulls headline strings out of a page using a CSS selector.
///
/// Returned strings are trimmed, whitespace-collapsed and never empty.
pub trait Extractor: Send + Sync + Clone {
    fn extract(&self, html: &str, selector: &str) -> Result<Vec<String>, AppError>;
}

/// Persists and reloads the aggregated headline list.
pub trait HeadlineCache: Send + Sync {
    /// Load the cached headlines. `Ok(None)` means there is no cache yet.
    fn load(&self) -> impl Future<Output = Result<Option<Vec<HeadlineRecord>>, AppError>> + Send;

    /// Replace the cached headlines with `headlines`.
    fn save(&self, headlines: &[HeadlineRecord])
    -> impl Future<Output = Result<(), AppError>> + Send;
}

/// Writes filtered headlines somewhere durable and reports where.
pub trait Exporter: Send + Sync {
    fn export(
        &self,
        headlines: &[HeadlineRecord],
    ) -> impl Future<Output = Result<PathBuf, AppError>> + Send;
}

/// Supplies the user's choices for a session.
pub trait Decisions {
    /// The keyword to filter headlines by.
    fn keyword(&self) -> Result<String, AppError>;

    /// Whether the filtered headlines should be exported.
    fn confirm_export(&self) -> Result<bool, AppError>;
}

