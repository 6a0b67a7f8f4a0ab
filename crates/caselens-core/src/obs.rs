//! Structured observability hooks for the case batch lifecycle.
//!
//! Events are emitted at `info!` (failures at `warn!`) with an `event`
//! field so JSON log consumers can filter on it.

use std::path::Path;

use tracing::info;

use crate::record::CaseAnalysisRecord;

/// Batch-scoped span tagged with the input directory.
///
/// Attach it with `Instrument::instrument` so it stays correct across awaits.
pub fn batch_span(input_dir: &Path) -> tracing::Span {
    tracing::info_span!("caselens.batch", input_dir = %input_dir.display())
}

/// Emit event: batch started with the number of recognized case files.
pub fn emit_batch_started(input_dir: &Path, case_files: usize) {
    info!(
        event = "batch.started",
        input_dir = %input_dir.display(),
        case_files = case_files,
    );
}

/// Emit event: one case analyzed and assembled.
pub fn emit_case_analyzed(record: &CaseAnalysisRecord) {
    info!(
        event = "case.analyzed",
        case_id = %record.case_id,
        severity = %record.severity,
        sentiment = %record.sentiment,
        summary_empty = record.case_summary.is_empty(),
    );
}

/// Emit event: one case failed (warning level).
pub fn emit_case_failed(case_file: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(event = "case.failed", case_file = %case_file, error = %error);
}

/// Emit event: batch finished.
pub fn emit_batch_finished(records: usize, failures: usize, duration_ms: u64) {
    info!(
        event = "batch.finished",
        records = records,
        failures = failures,
        duration_ms = duration_ms,
    );
}
