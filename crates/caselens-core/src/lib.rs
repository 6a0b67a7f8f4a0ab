//! Caselens Core Library
//!
//! Turns a folder of call-center transcript files into one collection of
//! case analysis records, using an injected [`AnalysisClient`] for the
//! language-model call and a tolerant line-based parser for its reply.
//!
//! ## Key Components
//!
//! - [`case`]: enumerating and loading case files
//! - [`reply`]: best-effort reply parsing
//! - [`processor`]: the sequential batch loop
//! - [`output`]: writing and reading the output collection

pub mod case;
pub mod error;
pub mod obs;
pub mod output;
pub mod processor;
pub mod prompt;
pub mod record;
pub mod reply;
pub mod telemetry;

pub use analysis_client::{AnalysisClient, AnalysisConfig, AnalysisRequest, OpenAiClient};

pub use case::{case_id_from_filename, list_case_files, load_case, CaseInput};
pub use error::{CaseError, Result};
pub use obs::{
    batch_span, emit_batch_finished, emit_batch_started, emit_case_analyzed, emit_case_failed,
};
pub use output::{read_collection, write_collection, DEFAULT_OUTPUT_FILE};
pub use processor::{
    BatchReport, CaseFailure, CaseProcessor, FailurePolicy, ProcessorConfig, DEFAULT_INPUT_DIR,
};
pub use prompt::build_prompt;
pub use record::{CaseAnalysisRecord, Sentiment, Severity, TimestampMode, PLACEHOLDER_TIMESTAMP};
pub use reply::{parse_reply, ParsedReply};
pub use telemetry::init_tracing;

/// Caselens version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
