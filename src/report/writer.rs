use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;
use crate::error::{MarketMoodError, Result};
use crate::report::Report;

pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(config: &Config) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
        }
    }

    /// Persist the report as pretty JSON. The document is written to a
    /// temporary file in the destination directory and renamed into place,
    /// so a failed write never leaves a partial artifact at the final path.
    pub fn write(&self, report: &Report) -> Result<PathBuf> {
        info!("Saving analysis...");

        fs::create_dir_all(&self.output_dir)?;

        let path = self
            .output_dir
            .join(format!("{}_companies_news_sentiment.json", report.country));

        let json = serde_json::to_string_pretty(report).map_err(|e| {
            MarketMoodError::export_error(format!("failed to serialize report: {}", e))
        })?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|e| {
            MarketMoodError::export_error(format!(
                "failed to write {}: {}",
                tmp_path.display(),
                e
            ))
        })?;
        fs::rename(&tmp_path, &path).map_err(|e| {
            MarketMoodError::export_error(format!(
                "failed to move report into place at {}: {}",
                path.display(),
                e
            ))
        })?;

        info!("{} companies analysis saved to {}", report.country, path.display());
        Ok(path)
    }
}

/// Re-read a saved report artifact.
pub fn read_report(path: &Path) -> Result<Report> {
    let content = fs::read_to_string(path).map_err(|e| {
        MarketMoodError::export_error(format!("failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        MarketMoodError::export_error(format!("malformed report at {}: {}", path.display(), e))
    })
}
