//! Cyclic expansion of a base rule list.
//!
//! Rule `i` is built from `base[i % base.len()]` with modifier
//! `MODIFIERS[i % MODIFIERS.len()]` appended to its title and description,
//! and gets the id `{base.id}-{i + 1}`.

use std::collections::HashSet;

use crate::error::RuleError;
use crate::rule::{BaseRule, ComplianceRule};
use crate::Result;

/// Suffixes cycled across generated variants.
pub const MODIFIERS: [&str; 10] = [
    "",
    " - voice channel",
    " - mobile app",
    " - web portal",
    " - third-party processor",
    " - escalated case",
    " - repeated occurrence",
    " - seasonal spike",
    " - high-value customer",
    " - regulatory notice",
];

/// Synonyms injected next to unauthorized-activity keywords.
pub const UNAUTHORIZED_SYNONYMS: [&str; 4] = [
    "unauthorised",
    "not recognized",
    "fraudulent",
    "suspicious",
];

/// Legacy list; carries a duplicate entry that the legacy profile keeps.
const LEGACY_UNAUTHORIZED_SYNONYMS: [&str; 5] = [
    "unauthorised",
    "not recognized",
    "not recognized",
    "fraudulent",
    "suspicious",
];

/// Synonyms injected next to payment-failure keywords.
pub const PAYMENT_FAILED_SYNONYMS: [&str; 3] = [
    "payment processing error",
    "payment not processed",
    "transaction failed",
];

/// Expansion variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpansionProfile {
    /// Keywords deduplicated, synonyms injected per matching keyword,
    /// description trimmed. Defaults to 200 rules.
    #[default]
    Deduplicated,
    /// Synonyms appended based on the first keyword and the joined keyword
    /// text, nothing deduplicated. Defaults to 2000 rules.
    Legacy,
}

impl ExpansionProfile {
    /// Number of rules generated when no count is given.
    pub fn default_count(self) -> usize {
        match self {
            ExpansionProfile::Deduplicated => 200,
            ExpansionProfile::Legacy => 2000,
        }
    }
}

/// Remove duplicates and empty strings, keeping first occurrences in order.
fn dedupe(keywords: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .into_iter()
        .filter(|k| !k.is_empty() && seen.insert(k.clone()))
        .collect()
}

fn extend_with(keywords: &mut Vec<String>, synonyms: &[&str]) {
    keywords.extend(synonyms.iter().map(|s| s.to_string()));
}

fn legacy_keywords(base: &BaseRule) -> Vec<String> {
    let mut keywords = base.keywords.clone();
    if base
        .keywords
        .first()
        .map(|k| k.contains("unauthorized"))
        .unwrap_or(false)
    {
        extend_with(&mut keywords, &LEGACY_UNAUTHORIZED_SYNONYMS);
    }
    if keywords.join(" ").contains("payment failed") {
        extend_with(&mut keywords, &PAYMENT_FAILED_SYNONYMS);
    }
    keywords
}

fn deduplicated_keywords(base: &BaseRule) -> Vec<String> {
    let mut keywords = Vec::new();
    for keyword in dedupe(base.keywords.iter().cloned()) {
        let lower = keyword.to_lowercase();
        keywords.push(keyword);
        if lower.contains("unauthor") {
            extend_with(&mut keywords, &UNAUTHORIZED_SYNONYMS);
        }
        if lower.contains("payment") || lower.contains("transaction") {
            extend_with(&mut keywords, &PAYMENT_FAILED_SYNONYMS);
        }
    }
    dedupe(keywords)
}

/// Build variant `index` of `base`.
pub fn expand_rule(base: &BaseRule, index: usize, profile: ExpansionProfile) -> ComplianceRule {
    let modifier = MODIFIERS[index % MODIFIERS.len()];
    let description = format!("{}{}", base.description, modifier);

    let (description, keywords) = match profile {
        ExpansionProfile::Legacy => (description, legacy_keywords(base)),
        ExpansionProfile::Deduplicated => {
            (description.trim().to_string(), deduplicated_keywords(base))
        }
    };

    ComplianceRule {
        id: format!("{}-{}", base.id, index + 1),
        title: format!("{}{}", base.title, modifier),
        category: base.category.clone(),
        description,
        keywords,
        severity: base.severity.clone(),
        sample_violations: base.sample_violations.clone(),
    }
}

/// Expand `base` into exactly `count` rules.
pub fn expand_rules(
    base: &[BaseRule],
    count: usize,
    profile: ExpansionProfile,
) -> Result<Vec<ComplianceRule>> {
    if base.is_empty() {
        return Err(RuleError::EmptyBase);
    }
    Ok((0..count)
        .map(|i| expand_rule(&base[i % base.len()], i, profile))
        .collect())
}
