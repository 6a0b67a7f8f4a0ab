//! End-to-end batch runs over temporary case directories with a scripted
//! analysis client.

use std::path::Path;

use analysis_client::fakes::ScriptedClient;
use caselens_core::{
    read_collection, write_collection, CaseError, CaseProcessor, FailurePolicy, ProcessorConfig,
    Sentiment, Severity, TimestampMode, PLACEHOLDER_TIMESTAMP,
};
use serde_json::json;
use tempfile::tempdir;

const REPLY: &str = "1. Summary: Payment failed twice before the due date.\n\
                     2. Severity: High - repeated issue near credit cycle\n\
                     3. Sentiment: Negative, customer is frustrated";

fn write_case(dir: &Path, file: &str, customer_id: &str, name: &str, agent: &str, text: &str) {
    let body = json!({
        "call_transcript": text,
        "customer_unique_id": customer_id,
        "customer_name": name,
        "support_agent_name": agent,
    });
    std::fs::write(dir.join(file), body.to_string()).unwrap();
}

#[tokio::test]
async fn test_two_valid_cases_and_one_foreign_file_yield_two_records() {
    let dir = tempdir().unwrap();
    write_case(dir.path(), "transcript_001.json", "C-001", "Ada", "Sam", "transcript one");
    write_case(dir.path(), "transcript_002.json", "C-002", "Grace", "Lee", "transcript two");
    std::fs::write(dir.path().join("readme.md"), "not a case").unwrap();

    let client = ScriptedClient::always(REPLY);
    let processor = CaseProcessor::new(&client, ProcessorConfig::new(dir.path()));

    let mut progress = Vec::new();
    let report = processor
        .run_with_progress(|name| progress.push(name.to_string()))
        .await
        .unwrap();

    assert!(report.is_clean());
    assert_eq!(report.records.len(), 2);
    assert_eq!(client.requests().len(), 2);

    // Records follow processing order, which is the order the client saw.
    for (record, request) in report.records.iter().zip(client.requests()) {
        let expected_text = match record.case_id.as_str() {
            "001" => "transcript one",
            "002" => "transcript two",
            other => panic!("unexpected case id {other}"),
        };
        assert!(request.prompt.contains(expected_text));
    }
    let progress_ids: Vec<String> = progress
        .iter()
        .map(|name| caselens_core::case_id_from_filename(name))
        .collect();
    let record_ids: Vec<String> = report.records.iter().map(|r| r.case_id.clone()).collect();
    assert_eq!(progress_ids, record_ids);

    let by_id = |id: &str| report.records.iter().find(|r| r.case_id == id).unwrap();
    let first = by_id("001");
    assert_eq!(first.customer_id, "C-001");
    assert_eq!(first.customer_name, "Ada");
    assert_eq!(first.agent_name, "Sam");
    let second = by_id("002");
    assert_eq!(second.customer_id, "C-002");
    assert_eq!(second.customer_name, "Grace");
    assert_eq!(second.agent_name, "Lee");

    for record in &report.records {
        assert_eq!(record.case_summary, "Payment failed twice before the due date.");
        assert_eq!(record.severity, Severity::High);
        assert_eq!(record.sentiment, Sentiment::Negative);
        assert_eq!(record.processed_at, PLACEHOLDER_TIMESTAMP);
    }
}

#[tokio::test]
async fn test_empty_directory_yields_empty_collection() {
    let dir = tempdir().unwrap();
    let client = ScriptedClient::always(REPLY);
    let processor = CaseProcessor::new(&client, ProcessorConfig::new(dir.path()));

    let report = processor.run().await.unwrap();
    assert!(report.records.is_empty());
    assert!(client.requests().is_empty());
}

#[tokio::test]
async fn test_malformed_case_aborts_the_run() {
    let dir = tempdir().unwrap();
    write_case(dir.path(), "transcript_1.json", "C-1", "Ada", "Sam", "fine");
    std::fs::write(dir.path().join("transcript_2.json"), "{ broken").unwrap();

    let client = ScriptedClient::always(REPLY);
    let processor = CaseProcessor::new(&client, ProcessorConfig::new(dir.path()));

    let err = processor.run().await.unwrap_err();
    assert!(matches!(err, CaseError::MalformedCase { .. }));
}

#[tokio::test]
async fn test_client_failure_aborts_the_run() {
    let dir = tempdir().unwrap();
    write_case(dir.path(), "transcript_1.json", "C-1", "Ada", "Sam", "one");
    write_case(dir.path(), "transcript_2.json", "C-2", "Bo", "Sam", "two");

    let client = ScriptedClient::always(REPLY).then_fail("quota exceeded");
    let processor = CaseProcessor::new(&client, ProcessorConfig::new(dir.path()));

    let err = processor.run().await.unwrap_err();
    assert!(matches!(err, CaseError::Analysis { .. }));
    assert_eq!(client.requests().len(), 1, "no call after the first failure");
}

#[tokio::test]
async fn test_keep_going_collects_failures_and_continues() {
    let dir = tempdir().unwrap();
    write_case(dir.path(), "transcript_1.json", "C-1", "Ada", "Sam", "one");
    write_case(dir.path(), "transcript_2.json", "C-2", "Bo", "Sam", "two");
    std::fs::write(dir.path().join("transcript_3.json"), "[]").unwrap();

    let client = ScriptedClient::always(REPLY).then_fail("timeout");
    let config = ProcessorConfig {
        failure_policy: FailurePolicy::KeepGoing,
        ..ProcessorConfig::new(dir.path())
    };
    let processor = CaseProcessor::new(&client, config);

    let report = processor.run().await.unwrap();
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.failures.len(), 2);
    assert!(!report.is_clean());
    assert!(report
        .failures
        .iter()
        .any(|f| f.case_file == "transcript_3.json" && f.error.contains("malformed")));
}

#[tokio::test]
async fn test_stamp_now_replaces_placeholder() {
    let dir = tempdir().unwrap();
    write_case(dir.path(), "transcript_1.json", "C-1", "Ada", "Sam", "one");

    let client = ScriptedClient::always(REPLY);
    let config = ProcessorConfig {
        timestamp: TimestampMode::Now,
        ..ProcessorConfig::new(dir.path())
    };
    let report = CaseProcessor::new(&client, config).run().await.unwrap();

    assert_ne!(report.records[0].processed_at, PLACEHOLDER_TIMESTAMP);
}

#[tokio::test]
async fn test_batch_output_survives_write_and_reread() {
    let dir = tempdir().unwrap();
    let cases = dir.path().join("cases");
    std::fs::create_dir(&cases).unwrap();
    for i in 0..5 {
        write_case(
            &cases,
            &format!("transcript_{i}.json"),
            &format!("C-{i}"),
            &format!("Customer {i}"),
            "Agent",
            &format!("text {i}"),
        );
    }

    let client = ScriptedClient::always(REPLY)
        .then_reply("Summary: only a question\nSeverity: Low\nSentiment: positive");
    let report = CaseProcessor::new(&client, ProcessorConfig::new(&cases))
        .run()
        .await
        .unwrap();

    let out = dir.path().join("case_analyses.json");
    write_collection(&out, &report.records).unwrap();
    let back = read_collection(&out).unwrap();

    assert_eq!(back.len(), 5);
    assert_eq!(back, report.records);
    assert_eq!(back[0].severity, Severity::Low);
    assert_eq!(back[0].sentiment, Sentiment::Positive);
}

#[tokio::test]
async fn test_numeric_customer_id_is_processed() {
    let dir = tempdir().unwrap();
    let body = json!({
        "call_transcript": "Customer: my card was charged twice",
        "customer_unique_id": 10452,
        "customer_name": "Ada",
        "support_agent_name": "Sam",
    });
    std::fs::write(dir.path().join("transcript_1.json"), body.to_string()).unwrap();

    let client = ScriptedClient::always(REPLY);
    let report = CaseProcessor::new(&client, ProcessorConfig::new(dir.path()))
        .run()
        .await
        .unwrap();

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].customer_id, "10452");
}
