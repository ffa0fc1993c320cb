//! Prompt construction for transcript analysis

/// System role message declaring the assistant's purpose.
pub const ANALYSIS_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that analyzes meeting transcripts and extracts key information.";

/// Build the analysis prompt for a meeting transcript.
///
/// The five section headers and their order form the output contract that
/// the response parser relies on. The transcript is embedded verbatim; no
/// validation is applied.
pub fn build_analysis_prompt(transcript: &str) -> String {
    format!(
        "Analyze the following meeting transcript and extract key information.\n\
\n\
Please provide your analysis in the following structured format:\n\
\n\
SUMMARY:\n\
[Provide a concise 3-5 sentence summary of the meeting]\n\
\n\
ACTION ITEMS:\n\
[List each action item on a new line, prefixed with \"- \". Include assigned person if mentioned]\n\
\n\
DECISIONS MADE:\n\
[List each decision on a new line, prefixed with \"- \"]\n\
\n\
OPEN QUESTIONS:\n\
[List each open question or follow-up on a new line, prefixed with \"- \"]\n\
\n\
ATTENDEES:\n\
[List each attendee on a new line, prefixed with \"- \". Only include if explicitly mentioned]\n\
\n\
Meeting Transcript:\n\
{transcript}"
    )
}
