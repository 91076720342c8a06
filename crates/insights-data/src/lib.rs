//! Data pipeline for Spotify Insights.
//!
//! Responsible for discovering and parsing the JSON export files, applying
//! the configured filter chain and computing every summary table the report
//! layer renders.

pub mod aggregator;
pub mod analysis;
pub mod filter;
pub mod reader;
