use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by Spotify Insights.
#[derive(Error, Debug)]
pub enum InsightsError {
    /// A configuration value is missing, malformed or contradictory.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A date string did not match the expected `YYYY-MM-DD` format.
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// A timezone name is not a recognised IANA identifier.
    #[error("Unrecognised timezone: {0}")]
    InvalidTimezone(String),

    /// The expected streaming-history directory does not exist.
    #[error("Data path not found: {}", .0.display())]
    DataPathNotFound(PathBuf),

    /// The data directory exists but contains no usable export files.
    #[error("No streaming data found in {}", .0.display())]
    NoDataFound(PathBuf),

    /// A file could not be opened or read from disk.
    #[error("Failed to read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An artifact could not be written to the results directory.
    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A CSV row or file could not be serialised.
    #[error("CSV error: {0}")]
    Csv(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the insights crates.
pub type Result<T> = std::result::Result<T, InsightsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = InsightsError::Config("YEAR conflicts with START_DATE".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: YEAR conflicts with START_DATE"
        );
    }

    #[test]
    fn test_error_display_invalid_date() {
        let err = InsightsError::InvalidDate("15-01-2024".to_string());
        assert_eq!(err.to_string(), "Invalid date: 15-01-2024 (expected YYYY-MM-DD)");
    }

    #[test]
    fn test_error_display_invalid_timezone() {
        let err = InsightsError::InvalidTimezone("Mars/Olympus".to_string());
        assert_eq!(err.to_string(), "Unrecognised timezone: Mars/Olympus");
    }

    #[test]
    fn test_error_display_no_data_found() {
        let err = InsightsError::NoDataFound(PathBuf::from("/data/history"));
        assert_eq!(err.to_string(), "No streaming data found in /data/history");
    }

    #[test]
    fn test_error_display_data_path_not_found() {
        let err = InsightsError::DataPathNotFound(PathBuf::from("/missing/dir"));
        assert_eq!(err.to_string(), "Data path not found: /missing/dir");
    }

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = InsightsError::FileRead {
            path: PathBuf::from("/some/export.json"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/export.json"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_file_write() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = InsightsError::FileWrite {
            path: PathBuf::from("/results/top_artists.html"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to write"));
        assert!(msg.contains("top_artists.html"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: InsightsError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: InsightsError = json_err.into();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }
}
