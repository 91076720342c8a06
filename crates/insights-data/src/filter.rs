//! The conjunctive predicate chain applied between loading and aggregation.

use insights_core::criteria::FilterCriteria;
use insights_core::models::PlaybackEvent;
use tracing::info;

/// `true` when `event` passes every configured predicate.
pub fn matches(event: &PlaybackEvent, criteria: &FilterCriteria) -> bool {
    if let Some(start) = criteria.start {
        if event.timestamp < start {
            return false;
        }
    }
    if let Some(end) = criteria.end {
        if event.timestamp > end {
            return false;
        }
    }
    if let Some(min_ms) = criteria.min_play_ms {
        if event.ms_played < min_ms {
            return false;
        }
    }
    if criteria.music_only && !event.is_music() {
        return false;
    }
    true
}

/// Apply `criteria` to `events`, keeping original order.
///
/// The output is always a positional subset of the input; an empty result is
/// valid and flows through to empty charts downstream.
pub fn apply(events: Vec<PlaybackEvent>, criteria: &FilterCriteria) -> Vec<PlaybackEvent> {
    let before = events.len();
    let filtered: Vec<PlaybackEvent> = events
        .into_iter()
        .filter(|e| matches(e, criteria))
        .collect();
    info!(
        "Filter kept {} of {} events ({} removed)",
        filtered.len(),
        before,
        before - filtered.len()
    );
    filtered
}

// ── Tests ─────────────────────────────────────────────────────────────────────
