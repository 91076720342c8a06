//! Filter criteria built from the loosely-typed environment settings.
//!
//! All date handling is validated here, once, at startup. Downstream code
//! only ever sees UTC instants.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::error::{InsightsError, Result};
use crate::settings::Settings;

/// Minimum play duration for a "Spotify-defined play": 30 seconds.
pub const SPOTIFY_DEFINED_PLAY_MS: u64 = 30_000;

/// The predicate chain applied to loaded playback events.
///
/// Invariant: when a year was configured, `start`/`end` span exactly that
/// calendar year regardless of any explicit date range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Inclusive lower bound on event timestamps; `None` means unbounded.
    pub start: Option<DateTime<Utc>>,
    /// Inclusive upper bound on event timestamps; `None` means unbounded.
    pub end: Option<DateTime<Utc>>,
    /// Minimum `ms_played` an event must reach, when set.
    pub min_play_ms: Option<u64>,
    /// Keep only music streams.
    pub music_only: bool,
}

impl FilterCriteria {
    /// Build validated criteria from raw settings.
    ///
    /// Date strings are interpreted in `tz`: a range day starts at 00:00:00
    /// and ends at 23:59:59 local time (inclusive-day semantics). `YEAR`
    /// supersedes any explicit `START_DATE`/`END_DATE`. Malformed dates and
    /// an inverted range are fatal configuration errors.
    pub fn from_settings(settings: &Settings, tz: Tz) -> Result<Self> {
        let (start, end) = if let Some(year) = settings.year {
            if settings.start_date.is_some() || settings.end_date.is_some() {
                warn!("YEAR={} is set; ignoring START_DATE/END_DATE", year);
            }
            let first = NaiveDate::from_ymd_opt(year, 1, 1)
                .ok_or_else(|| InsightsError::Config(format!("invalid YEAR: {}", year)))?;
            let last = NaiveDate::from_ymd_opt(year, 12, 31)
                .ok_or_else(|| InsightsError::Config(format!("invalid YEAR: {}", year)))?;
            (Some(day_start(first, tz)?), Some(day_end(last, tz)?))
        } else {
            let start = settings
                .start_date
                .as_deref()
                .map(|s| parse_date(s).and_then(|d| day_start(d, tz)))
                .transpose()?;
            let end = settings
                .end_date
                .as_deref()
                .map(|s| parse_date(s).and_then(|d| day_end(d, tz)))
                .transpose()?;
            (start, end)
        };

        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(InsightsError::Config(format!(
                    "start date {} is after end date {}",
                    s.with_timezone(&tz).format("%Y-%m-%d"),
                    e.with_timezone(&tz).format("%Y-%m-%d"),
                )));
            }
        }

        Ok(Self {
            start,
            end,
            min_play_ms: settings
                .spotify_defined_play
                .then_some(SPOTIFY_DEFINED_PLAY_MS),
            music_only: settings.music_only_mode,
        })
    }

    /// Human-readable description of the date range, used in chart titles.
    pub fn range_label(&self, tz: Tz) -> String {
        let fmt = |dt: DateTime<Utc>| dt.with_timezone(&tz).format("%Y-%m-%d").to_string();
        match (self.start, self.end) {
            (Some(s), Some(e)) => format!("{} to {}", fmt(s), fmt(e)),
            (Some(s), None) => format!("{} onwards", fmt(s)),
            (None, Some(e)) => format!("up to {}", fmt(e)),
            (None, None) => "All available data".to_string(),
        }
    }
}

// ── Date helpers ──────────────────────────────────────────────────────────────

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| InsightsError::InvalidDate(s.to_string()))
}

fn day_start(date: NaiveDate, tz: Tz) -> Result<DateTime<Utc>> {
    local_instant(date, 0, 0, 0, tz)
}

fn day_end(date: NaiveDate, tz: Tz) -> Result<DateTime<Utc>> {
    local_instant(date, 23, 59, 59, tz)
}

/// Resolve a local wall-clock time in `tz` to a UTC instant.
///
/// Uses the earliest mapping for times that are ambiguous around DST folds;
/// times that do not exist (spring-forward gaps) are a configuration error.
fn local_instant(date: NaiveDate, h: u32, m: u32, s: u32, tz: Tz) -> Result<DateTime<Utc>> {
    let naive = date
        .and_hms_opt(h, m, s)
        .ok_or_else(|| InsightsError::InvalidDate(date.to_string()))?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            InsightsError::InvalidDate(format!("{} does not exist in {}", naive, tz.name()))
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
