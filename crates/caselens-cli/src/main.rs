//! Caselens - call-center case analysis CLI
//!
//! ## Commands
//!
//! - `analyze`: analyze every transcript in a folder and write `case_analyses.json`
//! - `rules`: expand the compliance base rules into a larger generated list

use std::path::{Path, PathBuf};

use analysis_client::{AnalysisClient, AnalysisConfig, OpenAiClient};
use anyhow::{Context, Result};
use caselens_core::{
    write_collection, CaseProcessor, FailurePolicy, ProcessorConfig, TimestampMode,
    DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE,
};
use clap::{Parser, Subcommand, ValueEnum};
use compliance_rules::{ExpansionProfile, DEFAULT_BASE_FILE, DEFAULT_OUT_FILE};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "caselens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Call-center transcript analysis and compliance rule tooling", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze every transcript file in a folder
    ///
    /// Requires OPENAI_API_KEY in the environment or a local .env file.
    Analyze {
        /// Folder containing transcript_*.json case files
        #[arg(short, long, env = "CASELENS_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
        input_dir: PathBuf,

        /// Output file (overwritten)
        #[arg(short, long, env = "CASELENS_OUTPUT", default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Model identifier (default: OPENAI_MODEL or gpt-4o)
        #[arg(short, long)]
        model: Option<String>,

        /// Requested maximum reply length in tokens
        #[arg(long, default_value_t = analysis_client::DEFAULT_MAX_TOKENS)]
        max_tokens: u32,

        /// API base URL (default: OPENAI_BASE_URL or the OpenAI endpoint)
        #[arg(long)]
        base_url: Option<String>,

        /// Continue past failing cases and write the records that succeeded
        #[arg(long)]
        keep_going: bool,

        /// Write the current UTC time instead of the placeholder timestamp
        #[arg(long)]
        stamp_now: bool,
    },

    /// Generate the expanded compliance rule list
    Rules {
        /// Expansion profile
        #[arg(short, long, value_enum, default_value_t = ProfileArg::Dedup)]
        profile: ProfileArg,

        /// Number of rules to generate (default: 200 for dedup, 2000 for legacy)
        #[arg(short, long)]
        count: Option<usize>,

        /// Base rule file
        #[arg(long, default_value = DEFAULT_BASE_FILE)]
        base: PathBuf,

        /// Output file (overwritten)
        #[arg(short, long, default_value = DEFAULT_OUT_FILE)]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProfileArg {
    /// Deduplicated keywords, per-keyword synonyms
    Dedup,
    /// Original first-keyword synonyms, no deduplication
    Legacy,
}

impl From<ProfileArg> for ExpansionProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Dedup => ExpansionProfile::Deduplicated,
            ProfileArg::Legacy => ExpansionProfile::Legacy,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Merge .env before clap so env-backed flags see it too.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    caselens_core::init_tracing(cli.json, level);

    match cli.command {
        Commands::Analyze {
            input_dir,
            output,
            model,
            max_tokens,
            base_url,
            keep_going,
            stamp_now,
        } => {
            let mut config =
                AnalysisConfig::from_env().context("Failed to load analysis configuration")?;
            if let Some(model) = model {
                config = config.with_model(&model);
            }
            if let Some(base_url) = base_url {
                config = config.with_base_url(&base_url);
            }
            config = config.with_max_tokens(max_tokens);

            let processor_config = ProcessorConfig {
                input_dir,
                timestamp: if stamp_now {
                    TimestampMode::Now
                } else {
                    TimestampMode::Placeholder
                },
                failure_policy: if keep_going {
                    FailurePolicy::KeepGoing
                } else {
                    FailurePolicy::FailFast
                },
            };

            info!(model = %config.model, "using analysis model");
            let client = OpenAiClient::new(config).context("Failed to create analysis client")?;
            cmd_analyze(&client, processor_config, &output).await
        }
        Commands::Rules {
            profile,
            count,
            base,
            output,
        } => cmd_rules(profile.into(), count, &base, &output),
    }
}

/// Run the case batch and write the output collection
async fn cmd_analyze(
    client: &dyn AnalysisClient,
    config: ProcessorConfig,
    output: &Path,
) -> Result<()> {
    info!(
        input_dir = %config.input_dir.display(),
        "starting case analysis"
    );
    let processor = CaseProcessor::new(client, config);

    let report = processor
        .run_with_progress(|file_name| println!("Processed: {}", file_name))
        .await
        .context("Case analysis aborted")?;

    write_collection(output, &report.records)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Analysis complete. Results saved to {}", output.display());

    if !report.is_clean() {
        for failure in &report.failures {
            eprintln!("Failed: {} ({})", failure.case_file, failure.error);
        }
        anyhow::bail!(
            "{} of {} cases failed",
            report.failures.len(),
            report.failures.len() + report.records.len()
        );
    }
    Ok(())
}

/// Expand the base rules and write the generated list
fn cmd_rules(
    profile: ExpansionProfile,
    count: Option<usize>,
    base: &Path,
    output: &Path,
) -> Result<()> {
    let count = count.unwrap_or_else(|| profile.default_count());
    let written = compliance_rules::generate(base, output, count, profile)
        .with_context(|| format!("Failed to generate rules from {}", base.display()))?;

    println!("Wrote {} rules to {}", written, output.display());
    Ok(())
}
