use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The `reason_end` code written when a track was skipped with the forward
/// button.
pub const FORWARD_SKIP_REASON: &str = "fwdbtn";

/// A single playback session read from a Spotify Extended Streaming History
/// export file.
///
/// Field names follow the export schema; unknown fields are ignored and
/// optional metadata defaults to `None` (podcast episodes, for example, carry
/// no track metadata). Events are immutable once loaded and have positional
/// identity only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackEvent {
    /// UTC instant when the playback session ended.
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,
    /// Platform the stream was played on (e.g. `"ios"`, `"windows"`).
    #[serde(default)]
    pub platform: String,
    /// Two-letter country code of the connection.
    #[serde(rename = "conn_country", default)]
    pub country: String,
    /// Milliseconds the track was actually played.
    #[serde(rename = "ms_played", default)]
    pub ms_played: u64,
    /// Track title; absent for podcast episodes.
    #[serde(rename = "master_metadata_track_name", default)]
    pub track_name: Option<String>,
    /// Album artist name; absent for podcast episodes.
    #[serde(rename = "master_metadata_album_artist_name", default)]
    pub artist_name: Option<String>,
    /// Album title; absent for podcast episodes.
    #[serde(rename = "master_metadata_album_album_name", default)]
    pub album_name: Option<String>,
    /// Spotify track URI.
    #[serde(rename = "spotify_track_uri", default)]
    pub track_uri: Option<String>,
    /// Podcast episode title, when the event is a podcast stream.
    #[serde(default)]
    pub episode_name: Option<String>,
    /// Podcast show name; a non-empty value marks the event as non-music.
    #[serde(default)]
    pub episode_show_name: Option<String>,
    /// Spotify episode URI, when the event is a podcast stream.
    #[serde(rename = "spotify_episode_uri", default)]
    pub episode_uri: Option<String>,
    /// Why playback started (e.g. `"clickrow"`, `"trackdone"`).
    #[serde(default)]
    pub reason_start: String,
    /// Why playback ended (e.g. `"trackdone"`, `"fwdbtn"`, `"backbtn"`).
    #[serde(default)]
    pub reason_end: String,
    /// Whether shuffle mode was on.
    #[serde(default)]
    pub shuffle: bool,
    /// Whether Spotify flagged the play as skipped.
    #[serde(default)]
    pub skipped: bool,
    /// Whether the stream was played offline.
    #[serde(default)]
    pub offline: bool,
    /// Whether the session ran in a private (incognito) session.
    #[serde(default)]
    pub incognito_mode: bool,
}

impl PlaybackEvent {
    /// `true` when this event is a music stream rather than a podcast or
    /// other content. A non-empty podcast show name marks it as non-music.
    pub fn is_music(&self) -> bool {
        self.episode_show_name
            .as_deref()
            .map_or(true, |show| show.is_empty())
    }

    /// Combined `"Track - Artist"` label used for track-level rankings.
    ///
    /// Returns `None` when either part is missing (podcasts, local files
    /// without metadata).
    pub fn track_artist(&self) -> Option<String> {
        match (self.track_name.as_deref(), self.artist_name.as_deref()) {
            (Some(track), Some(artist)) => Some(format!("{} - {}", track, artist)),
            _ => None,
        }
    }

    /// `true` when the session ended via the manual forward-skip button.
    pub fn is_forward_skip(&self) -> bool {
        self.reason_end == FORWARD_SKIP_REASON
    }
}

/// How a [`SummaryTable`] should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Vertical bars (histograms, hourly patterns).
    Bar,
    /// Horizontal bars (top-N rankings with long category labels).
    HorizontalBar,
    /// Line with markers (trends over time).
    Line,
    /// Pie of categorical proportions.
    Pie,
}

/// A named, ordered collection of `(category, value)` pairs produced by one
/// aggregation. Derived data, recomputed each run and never mutated after
/// creation.
#[derive(Debug, Clone)]
pub struct SummaryTable {
    /// Filename stem for the emitted artifact (e.g. `"top_artists"`).
    pub name: String,
    /// Human-readable chart title.
    pub title: String,
    /// Label for the category axis.
    pub category_label: String,
    /// Label for the value axis.
    pub value_label: String,
    /// Ordered rows; order is the presentation order of the chart.
    pub rows: Vec<(String, f64)>,
}

impl SummaryTable {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        category_label: impl Into<String>,
        value_label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            category_label: category_label.into(),
            value_label: value_label.into(),
            rows: Vec::new(),
        }
    }

    /// Append one `(category, value)` row.
    pub fn push(&mut self, category: impl Into<String>, value: f64) {
        self.rows.push((category.into(), value));
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// All categories in row order.
    pub fn categories(&self) -> Vec<String> {
        self.rows.iter().map(|(c, _)| c.clone()).collect()
    }

    /// All values in row order.
    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().map(|(_, v)| *v).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn music_event() -> PlaybackEvent {
        PlaybackEvent {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            platform: "ios".to_string(),
            country: "US".to_string(),
            ms_played: 180_000,
            track_name: Some("So What".to_string()),
            artist_name: Some("Miles Davis".to_string()),
            album_name: Some("Kind of Blue".to_string()),
            track_uri: Some("spotify:track:abc".to_string()),
            episode_name: None,
            episode_show_name: None,
            episode_uri: None,
            reason_start: "clickrow".to_string(),
            reason_end: "trackdone".to_string(),
            shuffle: false,
            skipped: false,
            offline: false,
            incognito_mode: false,
        }
    }

    // ── PlaybackEvent deserialization ────────────────────────────────────────

    #[test]
    fn test_deserialize_export_fields() {
        let json = serde_json::json!({
            "ts": "2024-01-15T10:30:00Z",
            "platform": "windows",
            "conn_country": "DE",
            "ms_played": 30123,
            "master_metadata_track_name": "Blue in Green",
            "master_metadata_album_artist_name": "Miles Davis",
            "master_metadata_album_album_name": "Kind of Blue",
            "spotify_track_uri": "spotify:track:xyz",
            "reason_start": "trackdone",
            "reason_end": "fwdbtn",
            "shuffle": true,
            "skipped": true,
        });
        let event: PlaybackEvent = serde_json::from_value(json).unwrap();

        assert_eq!(event.platform, "windows");
        assert_eq!(event.country, "DE");
        assert_eq!(event.ms_played, 30_123);
        assert_eq!(event.track_name.as_deref(), Some("Blue in Green"));
        assert_eq!(event.reason_end, "fwdbtn");
        assert!(event.shuffle);
        assert!(event.skipped);
        assert!(event.is_music());
    }

    #[test]
    fn test_deserialize_podcast_event() {
        let json = serde_json::json!({
            "ts": "2024-02-01T08:00:00Z",
            "platform": "android",
            "conn_country": "US",
            "ms_played": 1_200_000,
            "master_metadata_track_name": null,
            "master_metadata_album_artist_name": null,
            "episode_name": "Episode 42",
            "episode_show_name": "Some Podcast",
            "spotify_episode_uri": "spotify:episode:abc",
            "reason_end": "endplay",
        });
        let event: PlaybackEvent = serde_json::from_value(json).unwrap();

        assert!(!event.is_music());
        assert!(event.track_artist().is_none());
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = serde_json::json!({
            "ts": "2024-01-15T10:30:00Z",
            "platform": "ios",
            "ms_played": 1000,
            "ip_addr_decrypted": "10.0.0.1",
            "user_agent_decrypted": "unknown",
        });
        let event: PlaybackEvent = serde_json::from_value(json).unwrap();
        assert_eq!(event.ms_played, 1_000);
    }

    // ── PlaybackEvent helpers ────────────────────────────────────────────────

    #[test]
    fn test_is_music_empty_show_name() {
        let mut event = music_event();
        event.episode_show_name = Some(String::new());
        assert!(event.is_music());
    }

    #[test]
    fn test_track_artist_label() {
        let event = music_event();
        assert_eq!(
            event.track_artist().as_deref(),
            Some("So What - Miles Davis")
        );
    }

    #[test]
    fn test_track_artist_missing_artist() {
        let mut event = music_event();
        event.artist_name = None;
        assert!(event.track_artist().is_none());
    }

    #[test]
    fn test_is_forward_skip() {
        let mut event = music_event();
        assert!(!event.is_forward_skip());
        event.reason_end = FORWARD_SKIP_REASON.to_string();
        assert!(event.is_forward_skip());
    }

    // ── SummaryTable ─────────────────────────────────────────────────────────

    #[test]
    fn test_summary_table_push_and_accessors() {
        let mut table = SummaryTable::new("top_artists", "Top Artists", "Artist", "Plays");
        table.push("Miles Davis", 42.0);
        table.push("John Coltrane", 17.0);

        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.categories(), vec!["Miles Davis", "John Coltrane"]);
        assert_eq!(table.values(), vec![42.0, 17.0]);
    }

    #[test]
    fn test_summary_table_empty() {
        let table = SummaryTable::new("daily", "Daily", "Date", "Tracks");
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.categories().is_empty());
    }
}
