//! Core domain types for Spotify Insights.
//!
//! Holds the playback-event model, filter criteria, configuration settings,
//! error types and timezone utilities shared by the data and report crates.

pub mod criteria;
pub mod error;
pub mod models;
pub mod settings;
pub mod time_utils;
