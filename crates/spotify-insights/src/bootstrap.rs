use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Results-directory bootstrap ────────────────────────────────────────────────

/// Ensure the results directory exists, creating any missing parents.
pub fn ensure_results_directory(results_dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(results_dir)?;
    Ok(results_dir.to_path_buf())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" | "CRITICAL" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_results_directory_creates_nested_path() {
        let tmp = TempDir::new().expect("tempdir");
        let target = tmp.path().join("out").join("Results");

        let created = ensure_results_directory(&target).expect("create");

        assert!(created.is_dir());
        assert_eq!(created, target);
    }

    #[test]
    fn test_ensure_results_directory_existing_is_ok() {
        let tmp = TempDir::new().expect("tempdir");

        ensure_results_directory(tmp.path()).expect("first");
        ensure_results_directory(tmp.path()).expect("second");
    }
}
