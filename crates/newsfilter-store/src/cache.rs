use std::path::{Path, PathBuf};

use newsfilter_core::AppError;
use newsfilter_core::models::HeadlineRecord;
use newsfilter_core::traits::HeadlineCache;
use tokio::fs;

/// JSON file cache of the most recent aggregation.
///
/// The file's existence is the only validity signal; nothing here expires it.
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    path: PathBuf,
}

impl JsonFileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the new contents are staged in before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl HeadlineCache for JsonFileCache {
    async fn load(&self) -> Result<Option<Vec<HeadlineRecord>>, AppError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No headline cache");
                return Ok(None);
            }
            Err(e) => {
                return Err(AppError::CacheError(format!(
                    "Failed to read cache {}: {e}",
                    self.path.display()
                )));
            }
        };

        let headlines: Vec<HeadlineRecord> = serde_json::from_str(&raw).map_err(|e| {
            AppError::CacheError(format!("Invalid cache file {}: {e}", self.path.display()))
        })?;

        tracing::info!(
            path = %self.path.display(),
            count = headlines.len(),
            "Loaded headline cache"
        );
        Ok(Some(headlines))
    }

    async fn save(&self, headlines: &[HeadlineRecord]) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(headlines)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::CacheError(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }

        let staging = self.staging_path();
        fs::write(&staging, json).await.map_err(|e| {
            AppError::CacheError(format!("Failed to write {}: {e}", staging.display()))
        })?;
        fs::rename(&staging, &self.path).await.map_err(|e| {
            AppError::CacheError(format!(
                "Failed to move cache into place at {}: {e}",
                self.path.display()
            ))
        })?;

        tracing::info!(
            path = %self.path.display(),
            count = headlines.len(),
            "Saved headline cache"
        );
        Ok(())
    }
}
