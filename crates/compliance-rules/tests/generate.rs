use std::collections::HashSet;

use compliance_rules::{
    generate, load_base_rules, ComplianceRule, ExpansionProfile, RuleError, UNAUTHORIZED_SYNONYMS,
};
use serde_json::{json, Value};
use tempfile::tempdir;

/// Twenty base rules; every fourth one is about unauthorized activity and
/// carries a duplicated keyword.
fn base_rules() -> Value {
    let rules: Vec<Value> = (0..20)
        .map(|i| {
            let keywords = if i % 4 == 0 {
                json!(["unauthorized charge", "dispute", "dispute"])
            } else if i % 4 == 1 {
                json!(["payment failed", "card declined"])
            } else {
                json!(["hold time", "callback"])
            };
            json!({
                "id": format!("CR-{:03}", i),
                "title": format!("Rule {}", i),
                "category": "conduct",
                "description": format!("Description {}", i),
                "keywords": keywords,
                "severity": "High",
                "sample_violations": ["example"],
            })
        })
        .collect();
    Value::Array(rules)
}

fn read_rules(path: &std::path::Path) -> Vec<ComplianceRule> {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_deduplicated_profile_generates_200_unique_rules_with_synonyms() {
    let dir = tempdir().unwrap();
    let base_path = dir.path().join("compliance_base.json");
    let out_path = dir.path().join("compliance_rules_2000.json");
    std::fs::write(&base_path, base_rules().to_string()).unwrap();

    let written = generate(&base_path, &out_path, 200, ExpansionProfile::Deduplicated).unwrap();
    assert_eq!(written, 200);

    let rules = read_rules(&out_path);
    assert_eq!(rules.len(), 200);

    let ids: HashSet<&str> = rules.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), 200);
    for (i, rule) in rules.iter().enumerate() {
        assert!(rule.id.ends_with(&format!("-{}", i + 1)), "bad id {}", rule.id);
    }

    let mut unauthorized_rules = 0;
    for rule in &rules {
        let unique: HashSet<&str> = rule.keywords.iter().map(|k| k.as_str()).collect();
        assert_eq!(unique.len(), rule.keywords.len(), "duplicates in {}", rule.id);

        if rule
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains("unauthor"))
        {
            unauthorized_rules += 1;
            for synonym in UNAUTHORIZED_SYNONYMS {
                assert!(unique.contains(synonym), "{} missing {}", rule.id, synonym);
            }
        }
    }
    assert_eq!(unauthorized_rules, 50);
}

#[test]
fn test_legacy_profile_defaults_to_2000_and_keeps_duplicates() {
    let dir = tempdir().unwrap();
    let base_path = dir.path().join("compliance_base.json");
    let out_path = dir.path().join("out.json");
    std::fs::write(&base_path, base_rules().to_string()).unwrap();

    let count = ExpansionProfile::Legacy.default_count();
    generate(&base_path, &out_path, count, ExpansionProfile::Legacy).unwrap();

    let rules = read_rules(&out_path);
    assert_eq!(rules.len(), 2000);
    assert_eq!(rules[1999].id, "CR-019-2000");
    // "dispute" twice from the base plus the doubled "not recognized".
    assert_eq!(rules[0].keywords.len(), 3 + 5);
}

#[test]
fn test_output_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let base_path = dir.path().join("base.json");
    let out_path = dir.path().join("out.json");
    std::fs::write(&base_path, base_rules().to_string()).unwrap();
    std::fs::write(&out_path, "previous contents that are much longer than needed").unwrap();

    generate(&base_path, &out_path, 3, ExpansionProfile::Deduplicated).unwrap();
    assert_eq!(read_rules(&out_path).len(), 3);
}

#[test]
fn test_missing_base_file_is_read_error() {
    let dir = tempdir().unwrap();
    let err = load_base_rules(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, RuleError::Read { .. }));
}

#[test]
fn test_empty_base_list_is_rejected() {
    let dir = tempdir().unwrap();
    let base_path = dir.path().join("base.json");
    std::fs::write(&base_path, "[]").unwrap();

    let err = generate(
        &base_path,
        &dir.path().join("out.json"),
        10,
        ExpansionProfile::Deduplicated,
    )
    .unwrap_err();
    assert!(matches!(err, RuleError::EmptyBase));
}
