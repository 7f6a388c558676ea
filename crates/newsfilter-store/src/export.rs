use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use newsfilter_core::AppError;
use newsfilter_core::models::HeadlineRecord;
use newsfilter_core::traits::Exporter;
use tokio::fs;

/// Writes filtered headlines to timestamped CSV files.
///
/// Files land in `dir` as `news_export_<YYYYMMDD>_<HHMMSS>.csv`. Two exports in
/// the same second share a name and the later one wins.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    dir: PathBuf,
}

impl CsvExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Export as if the current local time were `at`.
    pub async fn export_at(
        &self,
        headlines: &[HeadlineRecord],
        at: NaiveDateTime,
    ) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::ExportError(format!("Failed to create {}: {e}", self.dir.display()))
        })?;

        let path = self.dir.join(export_file_name(at));
        let bytes = to_csv(headlines)?;
        fs::write(&path, bytes).await.map_err(|e| {
            AppError::ExportError(format!("Failed to write {}: {e}", path.display()))
        })?;

        tracing::info!(path = %path.display(), rows = headlines.len(), "Exported headlines");
        Ok(path)
    }
}

impl Exporter for CsvExporter {
    async fn export(&self, headlines: &[HeadlineRecord]) -> Result<PathBuf, AppError> {
        self.export_at(headlines, Local::now().naive_local()).await
    }
}

pub fn export_file_name(at: NaiveDateTime) -> String {
    format!("news_export_{}.csv", at.format("%Y%m%d_%H%M%S"))
}

/// Serialize records with a `source,headline` header row.
fn to_csv(headlines: &[HeadlineRecord]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    // Written explicitly so an empty export still has its header.
    writer
        .write_record(["source", "headline"])
        .map_err(|e| AppError::ExportError(e.to_string()))?;
    for h in headlines {
        writer
            .write_record([h.source.as_str(), h.headline.as_str()])
            .map_err(|e| AppError::ExportError(e.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::ExportError(e.to_string()))
}
