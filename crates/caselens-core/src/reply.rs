//! Best-effort parsing of free-text analysis replies.
//!
//! The reply is only loosely expected to contain three numbered points
//! (summary, severity, sentiment). Parsing never fails: anything that does
//! not look like one of the points leaves the field at its default.
//!
//! Each line is claimed by the first marker it matches, checked in the
//! order summary, severity, sentiment. A line such as
//! `"1. Summary (Severity: High)"` therefore only sets the summary.

use crate::record::{Sentiment, Severity};

/// Fields recovered from one reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReply {
    pub summary: String,
    pub severity: Severity,
    pub sentiment: Sentiment,
}

fn is_summary_line(line: &str) -> bool {
    line.starts_with("1.") || line.contains("Summary")
}

fn is_severity_line(line: &str) -> bool {
    line.starts_with("2.") || line.contains("Severity")
}

fn is_sentiment_line(line: &str) -> bool {
    line.starts_with("3.") || line.contains("Sentiment")
}

/// Text after the first colon, trimmed; the whole line when there is none.
fn summary_value(line: &str) -> String {
    match line.split_once(':') {
        Some((_, rest)) => rest.trim().to_string(),
        None => line.to_string(),
    }
}

/// Parse an analysis reply.
///
/// - summary: last summary line wins
/// - severity: `High` (case-sensitive) beats `Low`; anything else keeps the current value
/// - sentiment: case-insensitive `positive` beats `negative`; anything else keeps the current value
pub fn parse_reply(reply: &str) -> ParsedReply {
    let mut parsed = ParsedReply::default();

    for line in reply.trim().lines() {
        if is_summary_line(line) {
            parsed.summary = summary_value(line);
        } else if is_severity_line(line) {
            if line.contains("High") {
                parsed.severity = Severity::High;
            } else if line.contains("Low") {
                parsed.severity = Severity::Low;
            }
        } else if is_sentiment_line(line) {
            let lower = line.to_lowercase();
            if lower.contains("positive") {
                parsed.sentiment = Sentiment::Positive;
            } else if lower.contains("negative") {
                parsed.sentiment = Sentiment::Negative;
            }
        }
    }

    parsed
}
