//! Compliance-Rules: procedural expansion of compliance rule lists
//!
//! A short list of hand-written base rules is grown into a larger list by
//! cycling through the base rules, appending channel/context modifiers and
//! injecting keyword synonyms.

mod error;
mod expand;
mod rule;

use std::path::Path;

use tracing::info;

pub use error::RuleError;
pub use expand::{
    expand_rule, expand_rules, ExpansionProfile, MODIFIERS, PAYMENT_FAILED_SYNONYMS,
    UNAUTHORIZED_SYNONYMS,
};
pub use rule::{BaseRule, ComplianceRule};

/// Result type for compliance-rules operations
pub type Result<T> = std::result::Result<T, RuleError>;

/// Default base rule file
pub const DEFAULT_BASE_FILE: &str = "data/compliance_base.json";

/// Default output file, shared by both profiles
pub const DEFAULT_OUT_FILE: &str = "data/compliance_rules_2000.json";

/// Load a JSON array of base rules
pub fn load_base_rules(path: &Path) -> Result<Vec<BaseRule>> {
    let content = std::fs::read_to_string(path).map_err(|source| RuleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| RuleError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write rules as an indented JSON array, replacing any existing file
pub fn write_rules(path: &Path, rules: &[ComplianceRule]) -> Result<()> {
    let content = serde_json::to_string_pretty(rules)?;
    std::fs::write(path, content).map_err(|source| RuleError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `base_path`, expand to `count` rules and write them to `out_path`.
///
/// Returns the number of rules written.
pub fn generate(
    base_path: &Path,
    out_path: &Path,
    count: usize,
    profile: ExpansionProfile,
) -> Result<usize> {
    let base = load_base_rules(base_path)?;
    let rules = expand_rules(&base, count, profile)?;
    write_rules(out_path, &rules)?;

    info!(
        event = "rules.generated",
        base_rules = base.len(),
        rules = rules.len(),
        profile = ?profile,
        out = %out_path.display(),
    );
    Ok(rules.len())
}
