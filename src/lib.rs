//! meetnotes - Extract structured notes from meeting transcripts
//!
//! Feeds a transcript either to an LLM (AI mode) or to a keyword-based
//! heuristic extractor (demo mode); both produce the same `MeetingRecord`.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod llm;
pub mod output;
pub mod session;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "meetnotes";
