//! Report emission for Spotify Insights.
//!
//! Renders summary tables as interactive plotly charts and persists the raw
//! and filtered event tables as CSV for reuse and debugging.

pub mod charts;
pub mod emitter;

pub use emitter::ReportEmitter;
