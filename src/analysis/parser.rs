//! Section scanner for loosely formatted analysis replies
//!
//! The model is asked to reply with five fixed section headers; in practice
//! replies arrive with extra whitespace, odd casing, missing sections, or
//! stray prose. This parser is a single-pass line scanner that tolerates all
//! of that and never fails.

use crate::analysis::record::MeetingRecord;

/// Which section of the reply a content line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Summary,
    ActionItems,
    Decisions,
    Questions,
    Attendees,
}

/// Header labels checked in declaration order; the first match wins and the
/// line is consumed as a header.
const SECTION_HEADERS: [(&str, Section); 5] = [
    ("SUMMARY:", Section::Summary),
    ("ACTION ITEMS:", Section::ActionItems),
    ("DECISIONS MADE:", Section::Decisions),
    ("OPEN QUESTIONS:", Section::Questions),
    ("ATTENDEES:", Section::Attendees),
];

/// List entries that mean "nothing found" and must not be recorded.
const SENTINEL_PHRASES: [&str; 4] = ["none", "n/a", "not mentioned", "not mentioned in transcript"];

/// Parse a section-headed reply into a `MeetingRecord`.
///
/// Total over its input: headerless or garbage text yields a record with
/// empty fields rather than an error. Content lines seen before the first
/// header are dropped.
pub fn parse(text: &str) -> MeetingRecord {
    let mut record = MeetingRecord::new();
    let mut current: Option<Section> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(section) = match_header(line) {
            current = Some(section);
            continue;
        }

        let Some(section) = current else {
            continue;
        };

        match section {
            Section::Summary => {
                if record.summary.is_empty() {
                    record.summary = line.to_string();
                } else {
                    record.summary.push(' ');
                    record.summary.push_str(line);
                }
            }
            _ => {
                let cleaned = strip_bullet(line);
                if cleaned.is_empty() || is_sentinel(cleaned) {
                    continue;
                }
                match section {
                    Section::ActionItems => record.action_items.push(cleaned.to_string()),
                    Section::Decisions => record.decisions.push(cleaned.to_string()),
                    Section::Questions => record.questions.push(cleaned.to_string()),
                    Section::Attendees => record.push_attendee(cleaned.to_string()),
                    Section::Summary => unreachable!(),
                }
            }
        }
    }

    record
}

/// Case-insensitive substring match against the fixed header table.
fn match_header(line: &str) -> Option<Section> {
    let upper = line.to_uppercase();
    SECTION_HEADERS
        .iter()
        .find(|(label, _)| upper.contains(label))
        .map(|(_, section)| *section)
}

/// Strip one leading bullet marker (`-`, `•`, `*`) and any whitespace after it.
fn strip_bullet(line: &str) -> &str {
    line.strip_prefix(['-', '•', '*'])
        .map(str::trim_start)
        .unwrap_or(line)
}

fn is_sentinel(entry: &str) -> bool {
    let lowered = entry.to_lowercase();
    SENTINEL_PHRASES.iter().any(|phrase| lowered == *phrase)
}
