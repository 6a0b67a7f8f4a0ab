//! Sequential case batch: list, load, analyze, parse, assemble.
//!
//! One case at a time; each analysis call is awaited before the next case
//! is loaded. Records accumulate in memory and are returned to the caller,
//! who writes them once.

use std::path::{Path, PathBuf};
use std::time::Instant;

use analysis_client::AnalysisClient;
use tracing::{debug, Instrument};

use crate::case::{list_case_files, load_case, CaseInput};
use crate::error::{CaseError, Result};
use crate::obs;
use crate::prompt::build_prompt;
use crate::record::{CaseAnalysisRecord, TimestampMode};
use crate::reply::parse_reply;

/// Default input directory, relative to the working directory.
pub const DEFAULT_INPUT_DIR: &str = "call_center_transcripts";

/// What to do when a single case fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the batch on the first error; nothing is returned.
    #[default]
    FailFast,
    /// Record the failure and continue with the next case.
    KeepGoing,
}

/// Batch configuration. Model and reply length belong to the client.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub input_dir: PathBuf,
    pub timestamp: TimestampMode,
    pub failure_policy: FailurePolicy,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        ProcessorConfig {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            timestamp: TimestampMode::Placeholder,
            failure_policy: FailurePolicy::FailFast,
        }
    }
}

impl ProcessorConfig {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        ProcessorConfig {
            input_dir: input_dir.into(),
            ..Self::default()
        }
    }
}

/// A case that could not be turned into a record (keep-going mode only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    pub case_file: String,
    pub error: String,
}

/// Outcome of a batch.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Records in processing order.
    pub records: Vec<CaseAnalysisRecord>,
    /// Always empty under [`FailurePolicy::FailFast`].
    pub failures: Vec<CaseFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Turns a folder of case files into analysis records.
///
/// The analysis client is supplied by the caller and borrowed for the
/// lifetime of the processor.
pub struct CaseProcessor<'a> {
    client: &'a dyn AnalysisClient,
    config: ProcessorConfig,
}

impl<'a> CaseProcessor<'a> {
    pub fn new(client: &'a dyn AnalysisClient, config: ProcessorConfig) -> Self {
        CaseProcessor { client, config }
    }

    /// Analyze one loaded case and assemble its record.
    pub async fn analyze_case(&self, case: &CaseInput) -> Result<CaseAnalysisRecord> {
        let request = self.client.request_for(&build_prompt(&case.transcript_text));

        let reply = self
            .client
            .analyze(&request)
            .await
            .map_err(|source| CaseError::Analysis {
                case_id: case.case_id.clone(),
                source,
            })?;
        debug!(case_id = %case.case_id, reply = %reply, "analysis reply");

        let parsed = parse_reply(&reply);
        Ok(CaseAnalysisRecord::assemble(
            case,
            parsed,
            self.config.timestamp.stamp(),
        ))
    }

    /// Load, analyze and assemble one case file.
    pub async fn process_file(&self, path: &Path) -> Result<CaseAnalysisRecord> {
        let case = load_case(path)?;
        self.analyze_case(&case).await
    }

    /// Run the batch without progress output.
    pub async fn run(&self) -> Result<BatchReport> {
        self.run_with_progress(|_| {}).await
    }

    /// Run the batch, calling `on_processed` with the file name of every
    /// case that produced a record.
    pub async fn run_with_progress<F>(&self, mut on_processed: F) -> Result<BatchReport>
    where
        F: FnMut(&str),
    {
        let span = obs::batch_span(&self.config.input_dir);
        self.run_batch(&mut on_processed).instrument(span).await
    }

    async fn run_batch(&self, on_processed: &mut dyn FnMut(&str)) -> Result<BatchReport> {
        let started = Instant::now();

        let files = list_case_files(&self.config.input_dir)?;
        obs::emit_batch_started(&self.config.input_dir, files.len());

        let mut report = BatchReport::default();
        for path in &files {
            let name = display_name(path);
            match self.process_file(path).await {
                Ok(record) => {
                    obs::emit_case_analyzed(&record);
                    report.records.push(record);
                    on_processed(&name);
                }
                Err(err) => {
                    obs::emit_case_failed(&name, &err);
                    match self.config.failure_policy {
                        FailurePolicy::FailFast => return Err(err),
                        FailurePolicy::KeepGoing => report.failures.push(CaseFailure {
                            case_file: name,
                            error: err.to_string(),
                        }),
                    }
                }
            }
        }

        obs::emit_batch_finished(
            report.records.len(),
            report.failures.len(),
            started.elapsed().as_millis() as u64,
        );
        Ok(report)
    }
}
