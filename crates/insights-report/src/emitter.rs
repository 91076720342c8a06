//! Artifact emission into the results directory.
//!
//! Each artifact is written independently: one failed chart is logged and
//! surfaced in the run summary without aborting the remaining emissions.

use std::path::{Path, PathBuf};

use insights_core::error::{InsightsError, Result};
use insights_core::models::{ChartKind, PlaybackEvent, SummaryTable};
use tracing::debug;

use crate::charts;

/// Writes charts and CSV exports to a configured results directory.
pub struct ReportEmitter {
    results_dir: PathBuf,
}

impl ReportEmitter {
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
        }
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Render `table` and write it as `<results_dir>/<table.name>.html`.
    pub fn emit(&self, table: &SummaryTable, kind: ChartKind) -> Result<PathBuf> {
        let path = self.results_dir.join(format!("{}.html", table.name));
        let html = charts::render(table, kind).to_html();
        std::fs::write(&path, html).map_err(|source| InsightsError::FileWrite {
            path: path.clone(),
            source,
        })?;
        debug!("Chart saved to {}", path.display());
        Ok(path)
    }

    /// Serialise `events` as `<results_dir>/<name>.csv` with the export's
    /// original column names.
    pub fn write_events_csv(&self, name: &str, events: &[PlaybackEvent]) -> Result<PathBuf> {
        let path = self.results_dir.join(format!("{}.csv", name));
        let mut writer = csv::Writer::from_path(&path)
            .map_err(|e| InsightsError::Csv(format!("{}: {}", path.display(), e)))?;
        for event in events {
            writer
                .serialize(event)
                .map_err(|e| InsightsError::Csv(format!("{}: {}", path.display(), e)))?;
        }
        writer.flush()?;
        debug!("Tabular data saved to {} ({} rows)", path.display(), events.len());
        Ok(path)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
