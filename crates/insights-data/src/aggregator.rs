//! Summary-table aggregation over the filtered event collection.
//!
//! Each function is a pure function of the event slice: grouping, counting
//! and ranking with stable first-seen tie-breaking. Empty input produces an
//! empty table, never an error.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use chrono::Timelike;
use chrono_tz::Tz;
use insights_core::models::{PlaybackEvent, SummaryTable};

/// Row cap for the top-artist and top-track rankings.
pub const TOP_LIMIT: usize = 20;

/// Row cap for the skip-analysis rankings.
pub const SKIP_LIST_LIMIT: usize = 50;

/// Minimum total plays a track needs before its skip ratio is meaningful.
pub const MIN_PLAYS_FOR_SKIP_RATE: u64 = 10;

// ── Time-bucket histograms ────────────────────────────────────────────────────

/// Count events per local calendar date, ascending by date.
pub fn daily_histogram(events: &[PlaybackEvent], tz: Tz) -> SummaryTable {
    period_histogram(
        events,
        tz,
        "%Y-%m-%d",
        "listening_histogram",
        "Tracks Listened Per Day",
        "Date",
    )
}

/// Count events per local year-month, ascending.
pub fn monthly_trend(events: &[PlaybackEvent], tz: Tz) -> SummaryTable {
    period_histogram(
        events,
        tz,
        "%Y-%m",
        "monthly_listening_trend",
        "Monthly Listening Trend",
        "Month",
    )
}

/// Count events per hour of day (0-23) in the configured timezone.
///
/// All 24 buckets are emitted so quiet hours render as explicit zeros.
pub fn hourly_pattern(events: &[PlaybackEvent], tz: Tz) -> SummaryTable {
    let mut buckets = [0u64; 24];
    for event in events {
        let hour = event.timestamp.with_timezone(&tz).hour() as usize;
        buckets[hour] += 1;
    }

    let mut table = SummaryTable::new(
        "hourly_listening_pattern",
        format!("Listening Patterns by Hour of Day ({})", tz.name()),
        "Hour of Day (0-23)",
        "Number of Tracks",
    );
    for (hour, count) in buckets.iter().enumerate() {
        table.push(hour.to_string(), *count as f64);
    }
    table
}

/// Shared driver for the date-keyed histograms. BTreeMap keeps the period
/// keys sorted ascending.
fn period_histogram(
    events: &[PlaybackEvent],
    tz: Tz,
    key_format: &str,
    name: &str,
    title: &str,
    category_label: &str,
) -> SummaryTable {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for event in events {
        let key = event
            .timestamp
            .with_timezone(&tz)
            .format(key_format)
            .to_string();
        *counts.entry(key).or_default() += 1;
    }

    let mut table = SummaryTable::new(name, title, category_label, "Number of Tracks");
    for (key, count) in counts {
        table.push(key, count as f64);
    }
    table
}

// ── Top-N rankings ────────────────────────────────────────────────────────────

/// Top `limit` artists by play count, descending, first-seen tie-break.
pub fn top_artists(events: &[PlaybackEvent], limit: usize) -> SummaryTable {
    let counts = ranked_counts(
        events.iter().filter_map(|e| e.artist_name.clone()),
        limit,
    );

    let mut table = SummaryTable::new(
        "top_artists",
        format!("Top {} Artists by Play Count", limit),
        "Artist",
        "Number of Plays",
    );
    for (artist, count) in counts {
        table.push(artist, count as f64);
    }
    table
}

/// Top `limit` tracks by play count, keyed `"Track - Artist"`.
pub fn top_tracks(events: &[PlaybackEvent], limit: usize) -> SummaryTable {
    let counts = ranked_counts(events.iter().filter_map(|e| e.track_artist()), limit);

    let mut table = SummaryTable::new(
        "top_tracks",
        format!("Top {} Tracks by Play Count", limit),
        "Track - Artist",
        "Number of Plays",
    );
    for (track, count) in counts {
        table.push(track, count as f64);
    }
    table
}

/// Count keys preserving first-seen order, then stable-sort descending and
/// truncate. Ties keep their first-seen order because the sort is stable
/// over the insertion-ordered vector.
fn ranked_counts(keys: impl IntoIterator<Item = String>, limit: usize) -> Vec<(String, u64)> {
    let mut counts = count_first_seen(keys);
    counts.sort_by_key(|&(_, count)| Reverse(count));
    counts.truncate(limit);
    counts
}

/// Occurrence counts in first-seen key order.
fn count_first_seen(keys: impl IntoIterator<Item = String>) -> Vec<(String, u64)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, u64)> = Vec::new();
    for key in keys {
        match index.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts
}

// ── Skip analysis ─────────────────────────────────────────────────────────────

/// Per-track play/skip tallies, in first-seen track order.
#[derive(Debug, Clone, Copy, Default)]
struct TrackStats {
    plays: u64,
    skips: u64,
    forward_skips: u64,
}

fn track_stats(events: &[PlaybackEvent]) -> Vec<(String, TrackStats)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut stats: Vec<(String, TrackStats)> = Vec::new();
    for event in events {
        let Some(key) = event.track_artist() else {
            continue;
        };
        let i = match index.get(&key) {
            Some(&i) => i,
            None => {
                index.insert(key.clone(), stats.len());
                stats.push((key, TrackStats::default()));
                stats.len() - 1
            }
        };
        let entry = &mut stats[i].1;
        entry.plays += 1;
        if event.skipped {
            entry.skips += 1;
        }
        if event.is_forward_skip() {
            entry.forward_skips += 1;
        }
    }
    stats
}

/// Raw skip counts per track, descending.
pub fn most_skipped_tracks(events: &[PlaybackEvent]) -> SummaryTable {
    let mut rows: Vec<(String, u64)> = track_stats(events)
        .into_iter()
        .filter(|(_, s)| s.skips > 0)
        .map(|(track, s)| (track, s.skips))
        .collect();
    rows.sort_by_key(|&(_, skips)| Reverse(skips));
    rows.truncate(SKIP_LIST_LIMIT);

    let mut table = SummaryTable::new(
        "most_skipped_tracks",
        format!("Top {} Most Skipped Tracks", SKIP_LIST_LIMIT),
        "Track - Artist",
        "Times Skipped",
    );
    for (track, skips) in rows {
        table.push(track, skips as f64);
    }
    table
}

/// Skip ratio descending, restricted to tracks with at least
/// [`MIN_PLAYS_FOR_SKIP_RATE`] total plays.
pub fn most_likely_skipped(events: &[PlaybackEvent]) -> SummaryTable {
    skip_rate_table(
        events,
        "most_likely_skipped_tracks",
        &format!(
            "Top {} Most Likely to be Skipped Tracks (min {} plays)",
            SKIP_LIST_LIMIT, MIN_PLAYS_FOR_SKIP_RATE
        ),
        true,
    )
}

/// Skip ratio ascending, restricted to tracks with at least
/// [`MIN_PLAYS_FOR_SKIP_RATE`] total plays.
pub fn least_likely_skipped(events: &[PlaybackEvent]) -> SummaryTable {
    skip_rate_table(
        events,
        "least_skipped_tracks",
        &format!(
            "Top {} Least Likely to be Skipped Tracks (min {} plays)",
            SKIP_LIST_LIMIT, MIN_PLAYS_FOR_SKIP_RATE
        ),
        false,
    )
}

fn skip_rate_table(
    events: &[PlaybackEvent],
    name: &str,
    title: &str,
    descending: bool,
) -> SummaryTable {
    let mut rows: Vec<(String, f64)> = track_stats(events)
        .into_iter()
        .filter(|(_, s)| s.plays >= MIN_PLAYS_FOR_SKIP_RATE)
        .map(|(track, s)| (track, s.skips as f64 / s.plays as f64))
        .collect();
    if descending {
        rows.sort_by(|a, b| b.1.total_cmp(&a.1));
    } else {
        rows.sort_by(|a, b| a.1.total_cmp(&b.1));
    }
    rows.truncate(SKIP_LIST_LIMIT);

    let mut table = SummaryTable::new(name, title, "Track - Artist", "Skip Rate");
    table.rows = rows;
    table
}

/// Counts of manual forward-button skips (`reason_end == "fwdbtn"`) per
/// track, descending. Unlike the ratio tables this looks only at the end
/// reason, not the general `skipped` flag.
pub fn forward_button_skips(events: &[PlaybackEvent]) -> SummaryTable {
    let counts = ranked_counts(
        events
            .iter()
            .filter(|e| e.is_forward_skip())
            .filter_map(|e| e.track_artist()),
        SKIP_LIST_LIMIT,
    );

    let mut table = SummaryTable::new(
        "most_skipped_by_button",
        format!("Top {} Most Skipped Tracks (by skip button)", SKIP_LIST_LIMIT),
        "Track - Artist",
        "Times Skipped",
    );
    for (track, count) in counts {
        table.push(track, count as f64);
    }
    table
}

// ── Categorical distributions ─────────────────────────────────────────────────

/// Occurrence counts of one categorical field, descending, for pie-style
/// rendering (proportions are derived by the chart from the raw counts).
pub fn categorical_distribution(
    events: &[PlaybackEvent],
    field: impl Fn(&PlaybackEvent) -> String,
    name: &str,
    title: &str,
    category_label: &str,
) -> SummaryTable {
    let counts = ranked_counts(events.iter().map(field), usize::MAX);

    let mut table = SummaryTable::new(name, title, category_label, "Count");
    for (category, count) in counts {
        table.push(category, count as f64);
    }
    table
}

// ── Tests ─────────────────────────────────────────────────────────────────────
