//! Error types for case processing.

use std::path::PathBuf;

use analysis_client::ClientError;
use thiserror::Error;

/// Errors produced while turning a folder of case files into records.
///
/// Reply non-conformance is deliberately absent: an unexpected reply shape
/// resolves to default field values, never to an error.
#[derive(Debug, Error)]
pub enum CaseError {
    /// The input directory could not be listed.
    #[error("failed to list input directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A case file could not be read.
    #[error("failed to read case file {}: {source}", path.display())]
    ReadCase {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A case file is not a JSON object with string fields.
    #[error("malformed case file {}: {source}", path.display())]
    MalformedCase {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The external analysis call failed.
    #[error("analysis failed for case {case_id}: {source}")]
    Analysis {
        case_id: String,
        #[source]
        source: ClientError,
    },

    /// The output collection could not be written.
    #[error("failed to write output {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A previously written output collection could not be read back.
    #[error("failed to read output {}: {source}", path.display())]
    ReadOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization of the output collection failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, CaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_case_error_displays_path() {
        let err = CaseError::ReadCase {
            path: PathBuf::from("call_center_transcripts/transcript_7.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("transcript_7.json"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_analysis_error_displays_case_id() {
        let err = CaseError::Analysis {
            case_id: "0042".to_string(),
            source: ClientError::EmptyReply,
        };
        assert!(err.to_string().contains("0042"));
    }
}
