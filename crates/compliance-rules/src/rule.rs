//! Rule records as stored on disk.

use serde::{Deserialize, Deserializer, Serialize};

fn default_severity() -> String {
    "Medium".to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_severity<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_severity))
}

/// Seed rule used as a template for generated variants.
///
/// Every field but `id` and `title` may be absent or `null` in the base
/// file; both read as the field's default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRule {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
    #[serde(default = "default_severity", deserialize_with = "null_as_default_severity")]
    pub severity: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sample_violations: Vec<String>,
}

/// One generated rule. Field order matches the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceRule {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub severity: String,
    pub sample_violations: Vec<String>,
}
