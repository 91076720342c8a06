//! Assembly of the full summary set for one report run.

use chrono_tz::Tz;
use insights_core::models::{ChartKind, PlaybackEvent, SummaryTable};

use crate::aggregator;

/// Compute every summary table the report emits, paired with how it should
/// be rendered. `range_label` is the human-readable date range shown in the
/// distribution chart titles.
pub fn build_summaries(
    events: &[PlaybackEvent],
    tz: Tz,
    range_label: &str,
) -> Vec<(SummaryTable, ChartKind)> {
    vec![
        (aggregator::daily_histogram(events, tz), ChartKind::Bar),
        (aggregator::hourly_pattern(events, tz), ChartKind::Bar),
        (aggregator::monthly_trend(events, tz), ChartKind::Line),
        (
            aggregator::top_artists(events, aggregator::TOP_LIMIT),
            ChartKind::HorizontalBar,
        ),
        (
            aggregator::top_tracks(events, aggregator::TOP_LIMIT),
            ChartKind::HorizontalBar,
        ),
        (
            aggregator::most_skipped_tracks(events),
            ChartKind::HorizontalBar,
        ),
        (
            aggregator::most_likely_skipped(events),
            ChartKind::HorizontalBar,
        ),
        (
            aggregator::least_likely_skipped(events),
            ChartKind::HorizontalBar,
        ),
        (
            aggregator::forward_button_skips(events),
            ChartKind::HorizontalBar,
        ),
        (
            aggregator::categorical_distribution(
                events,
                |e| e.platform.clone(),
                "platform_distribution",
                &format!("Listening by Platform from {}", range_label),
                "Platform",
            ),
            ChartKind::Pie,
        ),
        (
            aggregator::categorical_distribution(
                events,
                |e| e.country.clone(),
                "country_distribution",
                &format!("Listening by Country from {}", range_label),
                "Country",
            ),
            ChartKind::Pie,
        ),
        (
            aggregator::categorical_distribution(
                events,
                |e| e.reason_end.clone(),
                "reason_end_distribution",
                &format!("Listening by Reason End from {}", range_label),
                "Reason End",
            ),
            ChartKind::Pie,
        ),
    ]
}

// ── Tests ─────────────────────────────────────────────────────────────────────
