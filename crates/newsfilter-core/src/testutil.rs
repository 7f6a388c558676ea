//! Test utilities: mock implementations of all core traits.
//!
//! Handwritten mocks for dependency injection in unit tests.
//! All mocks use `Arc<Mutex<_>>` for interior mutability, allowing
//! test assertions on recorded calls.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::aggregate::{AggregateEvent, AggregateReporter};
use crate::error::AppError;
use crate::models::HeadlineRecord;
use crate::traits::{Decisions, Exporter, Extractor, Fetcher, HeadlineCache};

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

/// Mock fetcher that returns a configurable response.
#[derive(Clone)]
pub struct MockFetcher {
    /// Queue of responses. Each call pops the first element.
    /// If empty, returns a default HTML string.
    responses: Arc<Mutex<Vec<Result<String, AppError>>>>,
    /// URLs requested, in call order.
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new(html: &str) -> Self {
        Self::with_responses(vec![Ok(html.to_string())])
    }

    pub fn with_error(error: AppError) -> Self {
        Self::with_responses(vec![Err(error)])
    }

    pub fn with_responses(responses: Vec<Result<String, AppError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        self.calls.lock().unwrap().push(url.to_string());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("<html><body>default</body></html>".to_string())
        } else {
            responses.remove(0)
        }
    }
}

// ---------------------------------------------------------------------------
// MockExtractor
// ---------------------------------------------------------------------------

/// Mock extractor that returns queued headline lists.
#[derive(Clone)]
pub struct MockExtractor {
    responses: Arc<Mutex<Vec<Result<Vec<String>, AppError>>>>,
}

impl MockExtractor {
    pub fn new(headlines: Vec<String>) -> Self {
        Self::with_responses(vec![Ok(headlines)])
    }

    pub fn with_error(error: AppError) -> Self {
        Self::with_responses(vec![Err(error)])
    }

    pub fn with_responses(responses: Vec<Result<Vec<String>, AppError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
        }
    }
}

impl Extractor for MockExtractor {
    fn extract(&self, _html: &str, _selector: &str) -> Result<Vec<String>, AppError> {
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(Vec::new())
        } else {
            responses.remove(0)
        }
    }
}

// ---------------------------------------------------------------------------
// MockCache
// ---------------------------------------------------------------------------

/// In-memory cache that records saves.
#[derive(Clone)]
pub struct MockCache {
    pub saved: Arc<Mutex<Vec<Vec<HeadlineRecord>>>>,
    stored: Arc<Mutex<Option<Vec<HeadlineRecord>>>>,
    save_error: Arc<Mutex<Option<AppError>>>,
}

impl MockCache {
    /// No cache present: forces a fetch.
    pub fn empty() -> Self {
        Self {
            saved: Arc::new(Mutex::new(Vec::new())),
            stored: Arc::new(Mutex::new(None)),
            save_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Cache already populated.
    pub fn with_headlines(headlines: Vec<HeadlineRecord>) -> Self {
        let cache = Self::empty();
        *cache.stored.lock().unwrap() = Some(headlines);
        cache
    }

    /// Empty cache whose save fails.
    pub fn with_save_error(error: AppError) -> Self {
        let cache = Self::empty();
        *cache.save_error.lock().unwrap() = Some(error);
        cache
    }
}

impl HeadlineCache for MockCache {
    async fn load(&self) -> Result<Option<Vec<HeadlineRecord>>, AppError> {
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save(&self, headlines: &[HeadlineRecord]) -> Result<(), AppError> {
        if let Some(e) = self.save_error.lock().unwrap().take() {
            return Err(e);
        }
        self.saved.lock().unwrap().push(headlines.to_vec());
        *self.stored.lock().unwrap() = Some(headlines.to_vec());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MockExporter
// ---------------------------------------------------------------------------

/// Mock exporter that records every exported batch.
#[derive(Clone)]
pub struct MockExporter {
    pub exported: Arc<Mutex<Vec<Vec<HeadlineRecord>>>>,
    error: Arc<Mutex<Option<AppError>>>,
}

impl MockExporter {
    pub fn new() -> Self {
        Self {
            exported: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_error(error: AppError) -> Self {
        let exporter = Self::new();
        *exporter.error.lock().unwrap() = Some(error);
        exporter
    }
}

impl Default for MockExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for MockExporter {
    async fn export(&self, headlines: &[HeadlineRecord]) -> Result<PathBuf, AppError> {
        if let Some(e) = self.error.lock().unwrap().take() {
            return Err(e);
        }
        self.exported.lock().unwrap().push(headlines.to_vec());
        Ok(PathBuf::from("exports/mock.csv"))
    }
}

// ---------------------------------------------------------------------------
// MockDecisions
// ---------------------------------------------------------------------------

/// Scripted user answers.
pub struct MockDecisions {
    keyword: String,
    export: bool,
    pub confirm_calls: Arc<Mutex<usize>>,
}

impl MockDecisions {
    pub fn new(keyword: &str, export: bool) -> Self {
        Self {
            keyword: keyword.to_string(),
            export,
            confirm_calls: Arc::new(Mutex::new(0)),
        }
    }
}

impl Decisions for MockDecisions {
    fn keyword(&self) -> Result<String, AppError> {
        Ok(self.keyword.clone())
    }

    fn confirm_export(&self) -> Result<bool, AppError> {
        *self.confirm_calls.lock().unwrap() += 1;
        Ok(self.export)
    }
}

// ---------------------------------------------------------------------------
// MockReporter
// ---------------------------------------------------------------------------

/// Mock aggregate reporter that records events as `Kind:source` labels.
#[derive(Default)]
pub struct MockReporter {
    pub events: Arc<Mutex<Vec<String>>>,
}

impl MockReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AggregateReporter for MockReporter {
    fn report(&self, event: AggregateEvent<'_>) {
        let label = match &event {
            AggregateEvent::SourceStarted { name } => format!("SourceStarted:{name}"),
            AggregateEvent::SourceCompleted { name, .. } => format!("SourceCompleted:{name}"),
            AggregateEvent::SourceFailed { name, .. } => format!("SourceFailed:{name}"),
        };
        self.events.lock().unwrap().push(label);
    }
}
