//! The output collection file: one JSON array of case analysis records.

use std::path::Path;

use crate::error::{CaseError, Result};
use crate::record::CaseAnalysisRecord;

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "case_analyses.json";

/// Write the whole collection as an indented JSON array, replacing any
/// previous file.
pub fn write_collection(path: &Path, records: &[CaseAnalysisRecord]) -> Result<()> {
    let content = serde_json::to_string_pretty(records)?;
    std::fs::write(path, content).map_err(|source| CaseError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a collection previously written by [`write_collection`].
pub fn read_collection(path: &Path) -> Result<Vec<CaseAnalysisRecord>> {
    let content = std::fs::read_to_string(path).map_err(|source| CaseError::ReadOutput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}
