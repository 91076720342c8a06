//! JSON export discovery and loading.
//!
//! Reads the playback-event arrays of a Spotify Extended Streaming History
//! export and concatenates them into a single ordered collection of
//! [`PlaybackEvent`] records.

use std::io::BufReader;
use std::path::{Path, PathBuf};

use insights_core::error::{InsightsError, Result};
use insights_core::models::PlaybackEvent;
use tracing::{info, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all `.json` files recursively under `data_path`, sorted by path.
pub fn find_json_files(data_path: &Path) -> Vec<PathBuf> {
    if !data_path.exists() {
        warn!("Data path does not exist: {}", data_path.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_path)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == "json")
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Load every export file under `data_path` and concatenate the events,
/// preserving file order and in-file order.
///
/// Files that cannot be opened or parsed are logged and skipped, matching
/// the per-file isolation of the export format (one broken file should not
/// lose the rest of the history). A missing directory, zero matching files
/// or zero total events is fatal: the run has nothing to analyse.
pub fn load_playback_events(data_path: &Path) -> Result<Vec<PlaybackEvent>> {
    if !data_path.exists() {
        return Err(InsightsError::DataPathNotFound(data_path.to_path_buf()));
    }

    let files = find_json_files(data_path);
    if files.is_empty() {
        return Err(InsightsError::NoDataFound(data_path.to_path_buf()));
    }

    let mut all_events: Vec<PlaybackEvent> = Vec::new();
    for file_path in &files {
        match load_single_file(file_path) {
            Ok(events) => {
                info!("Loaded {}: {} records", file_path.display(), events.len());
                all_events.extend(events);
            }
            Err(e) => warn!("Skipping {}: {}", file_path.display(), e),
        }
    }

    if all_events.is_empty() {
        return Err(InsightsError::NoDataFound(data_path.to_path_buf()));
    }

    info!("Total records ingested: {}", all_events.len());
    Ok(all_events)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Parse one export file as a JSON array of playback events.
fn load_single_file(path: &Path) -> Result<Vec<PlaybackEvent>> {
    let file = std::fs::File::open(path).map_err(|source| InsightsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let events: Vec<PlaybackEvent> = serde_json::from_reader(BufReader::new(file))?;
    Ok(events)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
