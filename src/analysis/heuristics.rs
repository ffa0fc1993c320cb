//! Offline pattern-matching extractor (demo mode)
//!
//! Produces the same record shape as the AI path using only keyword and
//! punctuation rules, so the tool stays usable without an API key. Each
//! category scans the transcript independently; a single line may contribute
//! to several categories.

use crate::analysis::record::MeetingRecord;

/// Keywords that mark a line as a likely action item.
const ACTION_KEYWORDS: [&str; 7] = [
    "will", "should", "need to", "must", "have to", "going to", "can you",
];

/// Keywords that mark a line as a likely decision.
const DECISION_KEYWORDS: [&str; 6] = ["decided", "agreed", "approved", "confirmed", "let's", "we will"];

/// Upper bounds keep pathological transcripts from flooding the output.
const MAX_ATTENDEES: usize = 20;
const MAX_ITEMS: usize = 10;
const MAX_ITEM_LEN: usize = 100;

/// Shortest after-colon fragment worth keeping as an item or decision.
const MIN_ITEM_LEN: usize = 10;

/// Extract a `MeetingRecord` from a raw transcript using pattern rules.
///
/// Deterministic for a given input (apart from the timestamp) and total:
/// empty input yields empty lists and a summary reporting zero counts.
pub fn extract(transcript: &str) -> MeetingRecord {
    let mut record = MeetingRecord::new();
    let line_count = transcript.lines().count();

    for line in transcript.lines() {
        if let Some(name) = attendee_candidate(line) {
            if record.attendees.len() < MAX_ATTENDEES {
                record.push_attendee(name.to_string());
            }
        }
    }

    record.action_items = keyword_lines(transcript, &ACTION_KEYWORDS);
    record.decisions = keyword_lines(transcript, &DECISION_KEYWORDS);
    record.questions = question_lines(transcript);

    record.summary = format!(
        "Demo analysis of meeting transcript with {} participants. \
         The transcript contains {} lines of discussion. \
         This is a demonstration mode - connect an OpenAI API key for AI-powered analysis.",
        record.attendees.len(),
        line_count
    );

    record
}

/// A line with a colon is a speaker-label candidate: the part before the
/// first colon counts as a name if it is short and starts with an uppercase
/// letter.
fn attendee_candidate(line: &str) -> Option<&str> {
    let (name, _) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() || name.split_whitespace().count() > 3 {
        return None;
    }
    let first = name.chars().next()?;
    first.is_uppercase().then_some(name)
}

/// Collect lines containing any of the given keywords, reduced to the text
/// after the speaker label and kept only when long enough to be meaningful.
fn keyword_lines(transcript: &str, keywords: &[&str]) -> Vec<String> {
    let mut found = Vec::new();
    for line in transcript.lines() {
        if found.len() == MAX_ITEMS {
            break;
        }
        let lowered = line.to_lowercase();
        if !keywords.iter().any(|k| lowered.contains(k)) {
            continue;
        }
        let content = after_speaker_label(line);
        if content.chars().count() > MIN_ITEM_LEN {
            found.push(truncate_chars(content, MAX_ITEM_LEN));
        }
    }
    found
}

/// Collect lines containing a question mark; no minimum length applies.
fn question_lines(transcript: &str) -> Vec<String> {
    let mut found = Vec::new();
    for line in transcript.lines() {
        if found.len() == MAX_ITEMS {
            break;
        }
        if !line.contains('?') {
            continue;
        }
        let content = after_speaker_label(line);
        if !content.is_empty() {
            found.push(truncate_chars(content, MAX_ITEM_LEN));
        }
    }
    found
}

/// Drop a leading `Speaker:` label, keeping the text after the first colon.
fn after_speaker_label(line: &str) -> &str {
    match line.split_once(':') {
        Some((_, rest)) => rest.trim(),
        None => line,
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
