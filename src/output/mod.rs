//! Rendering and persistence of analysis results

mod markdown;

pub use markdown::{format_markdown, notes_filename, save_record};

use crate::analysis::MeetingRecord;

/// Render a record as plain text for the terminal.
pub fn format_terminal(record: &MeetingRecord) -> String {
    let mut output = String::new();

    output.push_str("SUMMARY\n");
    if record.summary.is_empty() {
        output.push_str("  No summary available\n");
    } else {
        output.push_str("  ");
        output.push_str(&record.summary);
        output.push('\n');
    }

    push_section(&mut output, "ACTION ITEMS", &record.action_items, "No action items identified");
    push_section(&mut output, "DECISIONS MADE", &record.decisions, "No decisions identified");
    push_section(
        &mut output,
        "OPEN QUESTIONS / FOLLOW-UPS",
        &record.questions,
        "No open questions identified",
    );
    push_section(
        &mut output,
        "ATTENDEES",
        &record.attendees,
        "Not mentioned in transcript",
    );

    output
}

fn push_section(output: &mut String, title: &str, entries: &[String], empty_note: &str) {
    output.push('\n');
    output.push_str(title);
    output.push('\n');
    if entries.is_empty() {
        output.push_str("  ");
        output.push_str(empty_note);
        output.push('\n');
    } else {
        for entry in entries {
            output.push_str("  - ");
            output.push_str(entry);
            output.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_demo;

    #[test]
    fn terminal_output_names_every_section() {
        let rendered = format_terminal(&analyze_demo("John: will handle the rollout next week"));
        for title in [
            "SUMMARY",
            "ACTION ITEMS",
            "DECISIONS MADE",
            "OPEN QUESTIONS / FOLLOW-UPS",
            "ATTENDEES",
        ] {
            assert!(rendered.contains(title), "missing section: {title}");
        }
        assert!(rendered.contains("- John"));
    }

    #[test]
    fn empty_sections_render_placeholders() {
        let rendered = format_terminal(&analyze_demo(""));
        assert!(rendered.contains("No action items identified"));
        assert!(rendered.contains("No decisions identified"));
        assert!(rendered.contains("No open questions identified"));
        assert!(rendered.contains("Not mentioned in transcript"));
    }
}
