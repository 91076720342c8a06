use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI / environment) ───────────────────────────────────────────────

/// Listening-behavior reports from a Spotify Extended Streaming History export.
///
/// Every option can be supplied either as a flag or through the corresponding
/// environment variable, so the tool also runs with no arguments at all.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "spotify-insights",
    about = "Chart and CSV reports from a Spotify Extended Streaming History export",
    version
)]
pub struct Settings {
    /// Calendar year to analyse; supersedes --start-date / --end-date
    #[arg(long, env = "YEAR")]
    pub year: Option<i32>,

    /// Inclusive start of the date range (YYYY-MM-DD)
    #[arg(long, env = "START_DATE")]
    pub start_date: Option<String>,

    /// Inclusive end of the date range (YYYY-MM-DD)
    #[arg(long, env = "END_DATE")]
    pub end_date: Option<String>,

    /// IANA timezone for local-time grouping ("auto" = system zone)
    #[arg(long, env = "TIMEZONE", default_value = "America/New_York")]
    pub timezone: String,

    /// Keep only Spotify-defined plays (at least 30 seconds)
    #[arg(long, env = "SPOTIFY_DEFINED_PLAY", default_value = "false", value_parser = parse_loose_bool, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    pub spotify_defined_play: bool,

    /// Keep only music streams (exclude podcasts and other content)
    #[arg(long, env = "MUSIC_ONLY_MODE", default_value = "false", value_parser = parse_loose_bool, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    pub music_only_mode: bool,

    /// Directory containing the exported JSON files
    #[arg(
        long,
        env = "DATA_DIR",
        default_value = "Data/Spotify Extended Streaming History"
    )]
    pub data_dir: PathBuf,

    /// Directory charts and CSV exports are written to
    #[arg(long, env = "RESULTS_DIR", default_value = "Results")]
    pub results_dir: PathBuf,

    /// Logging level
    #[arg(long, env = "LOG_LEVEL", default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Logging level after applying the `--debug` override.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }
}

/// Parse the loose boolean spellings accepted in the environment
/// (`true`/`1`/`t`/`yes` and their negations, case-insensitive).
fn parse_loose_bool(s: &str) -> Result<bool, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "t" | "yes" | "y" => Ok(true),
        "false" | "0" | "f" | "no" | "n" | "" => Ok(false),
        other => Err(format!("not a boolean: {}", other)),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
