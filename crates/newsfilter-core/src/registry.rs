use std::path::Path;

use serde::Deserialize;

use crate::error::AppError;
use crate::models::SourceDescriptor;

/// On-disk shape of the sources file. Entries stay raw so one bad entry
/// cannot fail the whole file.
#[derive(Debug, Deserialize)]
struct SourcesFile {
    sources: Vec<serde_json::Value>,
}

/// Load the list of source descriptors from a JSON sources file.
///
/// The file must be an object with a `sources` array. Individual entries are
/// not validated here; a descriptor missing its `url` or `headline_selector`
/// fails later, for that source only.
pub fn load_sources(path: &Path) -> Result<Vec<SourceDescriptor>, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::ConfigError(format!(
            "Failed to read sources file {}: {e}",
            path.display()
        ))
    })?;

    let parsed: SourcesFile = serde_json::from_str(&raw).map_err(|e| {
        AppError::ConfigError(format!(
            "Invalid sources file {}: {e}",
            path.display()
        ))
    })?;

    let sources: Vec<SourceDescriptor> =
        parsed.sources.iter().map(SourceDescriptor::from_value).collect();

    tracing::info!(
        path = %path.display(),
        count = sources.len(),
        "Loaded news sources"
    );

    Ok(sources)
}
