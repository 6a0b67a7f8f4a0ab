//! Error types for compliance-rules

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while expanding a rule list
#[derive(Error, Debug)]
pub enum RuleError {
    /// Base rule file could not be read
    #[error("failed to read base rules {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Base rule file is not a JSON array of rules
    #[error("invalid base rules {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Nothing to expand from
    #[error("base rule list is empty")]
    EmptyBase,

    /// Expanded rules could not be written
    #[error("failed to write rules {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
