//! Case analysis records and their enumerated fields.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::case::CaseInput;
use crate::reply::ParsedReply;

/// Value written to `timestamp` unless real timestamps are requested.
pub const PLACEHOLDER_TIMESTAMP: &str = "Recently analyzed";

/// Case severity as judged from the analysis reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    #[default]
    Medium,
    Low,
}

/// Overall customer sentiment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        };
        f.write_str(s)
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        };
        f.write_str(s)
    }
}

/// How `processed_at` is filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampMode {
    /// The constant [`PLACEHOLDER_TIMESTAMP`].
    #[default]
    Placeholder,
    /// Current UTC time, RFC 3339 with second precision.
    Now,
}

impl TimestampMode {
    pub fn stamp(self) -> String {
        match self {
            TimestampMode::Placeholder => PLACEHOLDER_TIMESTAMP.to_string(),
            TimestampMode::Now => Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Structured output unit for one case. Serialized with the keys of the
/// `case_analyses.json` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseAnalysisRecord {
    #[serde(rename = "id")]
    pub case_id: String,
    #[serde(rename = "customerId")]
    pub customer_id: String,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    #[serde(rename = "agentName")]
    pub agent_name: String,
    #[serde(rename = "caseSummary")]
    pub case_summary: String,
    pub sentiment: Sentiment,
    pub severity: Severity,
    #[serde(rename = "timestamp")]
    pub processed_at: String,
}

impl CaseAnalysisRecord {
    /// Combine case identity with the parsed reply.
    pub fn assemble(case: &CaseInput, parsed: ParsedReply, processed_at: String) -> Self {
        CaseAnalysisRecord {
            case_id: case.case_id.clone(),
            customer_id: case.customer_id.clone(),
            customer_name: case.customer_name.clone(),
            agent_name: case.agent_name.clone(),
            case_summary: parsed.summary,
            sentiment: parsed.sentiment,
            severity: parsed.severity,
            processed_at,
        }
    }
}
