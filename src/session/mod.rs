//! In-memory session history
//!
//! Holds every record produced during one invocation. Owned by the caller
//! rather than stored globally; nothing survives the process.

use crate::analysis::MeetingRecord;

/// Append-only list of analysis results for the current session.
#[derive(Debug, Default)]
pub struct SessionHistory {
    records: Vec<MeetingRecord>,
}

impl SessionHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the session.
    pub fn append(&mut self, record: MeetingRecord) {
        self.records.push(record);
    }

    /// Snapshot of all records in append order.
    ///
    /// Returns a copy so callers cannot mutate the authoritative list.
    pub fn records(&self) -> Vec<MeetingRecord> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Human-readable recap of the session, one line per record.
    pub fn recap(&self) -> String {
        if self.records.is_empty() {
            return "No meeting analyses in current session.".to_string();
        }

        let mut output = String::from("Session history:\n");
        for (idx, record) in self.records.iter().enumerate() {
            let summary: String = record.summary.chars().take(100).collect();
            let ellipsis = if record.summary.chars().count() > 100 {
                "..."
            } else {
                ""
            };
            output.push_str(&format!(
                "  {}. Meeting at {} - {}{}\n",
                idx + 1,
                record.created_at.format("%H:%M:%S"),
                summary,
                ellipsis
            ));
        }
        output
    }
}
