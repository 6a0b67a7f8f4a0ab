//! Case input files: enumeration and loading.

use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CaseError, Result};

/// Extension of recognized case files.
pub const CASE_FILE_EXTENSION: &str = ".json";

/// Filename prefix stripped when deriving a case id.
pub const CASE_FILE_PREFIX: &str = "transcript_";

/// One parsed transcript record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseInput {
    pub case_id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub agent_name: String,
    pub transcript_text: String,
}

/// On-disk shape. Absent and `null` fields both read as empty; numbers and
/// booleans are kept as their JSON text.
#[derive(Debug, Default, Deserialize)]
struct CaseFile {
    #[serde(default)]
    call_transcript: Option<Value>,
    #[serde(default)]
    customer_unique_id: Option<Value>,
    #[serde(default)]
    customer_name: Option<Value>,
    #[serde(default)]
    support_agent_name: Option<Value>,
}

fn field_text(name: &str, value: Option<Value>) -> serde_json::Result<String> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(scalar @ (Value::Number(_) | Value::Bool(_))) => Ok(scalar.to_string()),
        Some(Value::Array(_) | Value::Object(_)) => Err(serde_json::Error::custom(format!(
            "field `{name}` must be a string, number or boolean"
        ))),
    }
}

impl CaseInput {
    /// Parse case file contents; `case_id` is supplied by the caller.
    pub fn from_json(case_id: &str, json: &str) -> serde_json::Result<Self> {
        let object: serde_json::Map<String, Value> = serde_json::from_str(json)?;
        let file: CaseFile = serde_json::from_value(Value::Object(object))?;
        Ok(CaseInput {
            case_id: case_id.to_string(),
            customer_id: field_text("customer_unique_id", file.customer_unique_id)?,
            customer_name: field_text("customer_name", file.customer_name)?,
            agent_name: field_text("support_agent_name", file.support_agent_name)?,
            transcript_text: field_text("call_transcript", file.call_transcript)?,
        })
    }
}

/// Derive a case id: drop the `.json` suffix, then a leading `transcript_`.
pub fn case_id_from_filename(file_name: &str) -> String {
    let stem = file_name
        .strip_suffix(CASE_FILE_EXTENSION)
        .unwrap_or(file_name);
    stem.strip_prefix(CASE_FILE_PREFIX)
        .unwrap_or(stem)
        .to_string()
}

/// List recognized case files in `dir`, in directory listing order.
///
/// Entries that are not regular files, or whose name does not end in
/// `.json`, are skipped without notice.
pub fn list_case_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = |source| CaseError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir)? {
        let path = entry.map_err(read_dir)?.path();
        let recognized = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(CASE_FILE_EXTENSION))
            .unwrap_or(false);
        if recognized && path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Load one case file.
pub fn load_case(path: &Path) -> Result<CaseInput> {
    let content = std::fs::read_to_string(path).map_err(|source| CaseError::ReadCase {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    CaseInput::from_json(&case_id_from_filename(&file_name), &content).map_err(|source| {
        CaseError::MalformedCase {
            path: path.to_path_buf(),
            source,
        }
    })
}
