use thiserror::Error;

/// Application-wide error types for newsfilter.
#[derive(Error, Debug)]
pub enum AppError {
    /// Sources file missing, unreadable, or malformed.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// A source descriptor lacks a field needed to scrape it.
    #[error("Invalid source: {0}")]
    InvalidSource(String),

    /// HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Network/connection error (DNS, refused, reset).
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Page content could not be turned into headlines.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Cache file could not be read or written.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// CSV export failed.
    #[error("Export error: {0}")]
    ExportError(String),

    /// Interactive input could not be read.
    #[error("Prompt error: {0}")]
    PromptError(String),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns true if this error belongs to a single source and should be
    /// isolated by the aggregator instead of aborting the run.
    pub fn is_source_failure(&self) -> bool {
        matches!(
            self,
            AppError::InvalidSource(_)
                | AppError::HttpError(_)
                | AppError::NetworkError(_)
                | AppError::Timeout(_)
                | AppError::ParseError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_failures() {
        assert!(AppError::NetworkError("refused".into()).is_source_failure());
        assert!(AppError::Timeout(10).is_source_failure());
        assert!(AppError::HttpError("HTTP 503".into()).is_source_failure());
        assert!(AppError::ParseError("bad page".into()).is_source_failure());
        assert!(AppError::InvalidSource("missing url".into()).is_source_failure());
    }

    #[test]
    fn test_fatal_errors() {
        assert!(!AppError::ConfigError("missing sources".into()).is_source_failure());
        assert!(!AppError::CacheError("disk full".into()).is_source_failure());
        assert!(!AppError::ExportError("read-only".into()).is_source_failure());
    }

    #[test]
    fn test_timeout_message() {
        assert_eq!(
            AppError::Timeout(10).to_string(),
            "Request timed out after 10 seconds"
        );
    }
}
