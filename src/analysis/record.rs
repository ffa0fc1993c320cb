//! The structured result of analyzing one transcript

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Structured notes extracted from a single meeting transcript.
///
/// Both the AI response parser and the heuristic extractor produce this
/// shape. Every field is always present; an empty string or empty list is
/// the "nothing found" signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingRecord {
    /// Free-text meeting summary, possibly empty
    pub summary: String,

    /// Action items in discovery order
    pub action_items: Vec<String>,

    /// Decisions in discovery order
    pub decisions: Vec<String>,

    /// Open questions and follow-ups in discovery order
    pub questions: Vec<String>,

    /// Attendee names, first-seen order, exact duplicates dropped
    pub attendees: Vec<String>,

    /// When this record was constructed
    pub created_at: DateTime<Local>,
}

impl MeetingRecord {
    /// Create an empty record stamped with the current time.
    pub fn new() -> Self {
        Self {
            summary: String::new(),
            action_items: Vec::new(),
            decisions: Vec::new(),
            questions: Vec::new(),
            attendees: Vec::new(),
            created_at: Local::now(),
        }
    }

    /// Add an attendee, preserving first-seen order and dropping exact
    /// (case-sensitive) duplicates.
    pub fn push_attendee(&mut self, name: String) {
        if !self.attendees.iter().any(|a| *a == name) {
            self.attendees.push(name);
        }
    }
}

impl Default for MeetingRecord {
    fn default() -> Self {
        Self::new()
    }
}
