//! Markdown rendering and file persistence
//!
//! The document layout is fixed: a level-1 heading carrying the timestamp,
//! then the five sections in order. Empty list sections render a single
//! placeholder line so a reader always sees every section.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::analysis::MeetingRecord;

/// Render a record as a Markdown document.
pub fn format_markdown(record: &MeetingRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "# Meeting Notes - {}\n\n",
        record.created_at.format("%Y-%m-%d %H:%M:%S")
    ));

    output.push_str("## Summary\n");
    if record.summary.is_empty() {
        output.push_str("No summary available\n");
    } else {
        output.push_str(&record.summary);
        output.push('\n');
    }
    output.push('\n');

    push_list_section(&mut output, "Action Items", &record.action_items, "No action items identified");
    push_list_section(&mut output, "Decisions Made", &record.decisions, "No decisions identified");
    push_list_section(
        &mut output,
        "Open Questions / Follow-ups",
        &record.questions,
        "No open questions identified",
    );

    output.push_str("## Attendees\n");
    if record.attendees.is_empty() {
        output.push_str("- Not mentioned in transcript\n");
    } else {
        for attendee in &record.attendees {
            output.push_str(&format!("- {}\n", attendee));
        }
    }

    output
}

fn push_list_section(output: &mut String, title: &str, entries: &[String], empty_note: &str) {
    output.push_str(&format!("## {}\n", title));
    if entries.is_empty() {
        output.push_str(&format!("- {}\n", empty_note));
    } else {
        for entry in entries {
            output.push_str(&format!("- {}\n", entry));
        }
    }
    output.push('\n');
}

/// Filename for a saved record: `meeting_notes_<YYYY-MM-DD>_<HHMMSS>.md`.
pub fn notes_filename(record: &MeetingRecord) -> String {
    format!(
        "meeting_notes_{}.md",
        record.created_at.format("%Y-%m-%d_%H%M%S")
    )
}

/// Write the Markdown document into `dir`, returning the path written.
pub fn save_record(record: &MeetingRecord, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create notes directory: {}", dir.display()))?;

    let path = dir.join(notes_filename(record));
    std::fs::write(&path, format_markdown(record))
        .with_context(|| format!("Failed to save notes to: {}", path.display()))?;

    Ok(path)
}
