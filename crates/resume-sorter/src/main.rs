use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;

use resume_sorter::config::{resolve_config, validate_config, Config, FailurePolicy};
use resume_sorter::pipeline::{sort_inputs, LogProgress};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

/// Sort PDF and DOCX resumes into job-category folders.
#[derive(Debug, Parser)]
#[command(name = "resume-sorter", version, about)]
struct Cli {
    /// Resume files or directories to classify. Directories are walked recursively.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory that receives one subfolder per category.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Config file (JSON or YAML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fitted TF-IDF vectorizer artifact.
    #[arg(long)]
    vectorizer: Option<PathBuf>,

    /// Fitted linear classifier artifact.
    #[arg(long)]
    classifier: Option<PathBuf>,

    /// Where to write the results CSV.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Stop at the first file that fails instead of recording it and continuing.
    #[arg(long)]
    fail_fast: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.output_dir {
            config.output_directory = dir.display().to_string();
        }
        if let Some(path) = &self.vectorizer {
            config.scorer.vectorizer_path = path.display().to_string();
        }
        if let Some(path) = &self.classifier {
            config.scorer.classifier_path = path.display().to_string();
        }
        if let Some(path) = &self.csv {
            config.results_csv = path.display().to_string();
        }
        if self.fail_fast {
            config.failure_policy = FailurePolicy::FailFast;
        }
    }
}

fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    tracing_log::LogTracer::init().context("Failed to bridge log records")?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let (text, json) = match format {
        LogFormat::Text => (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json);
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format)?;

    let mut config = resolve_config(cli.config.as_deref()).context("Failed to load config")?;
    cli.apply_overrides(&mut config);
    validate_config(&config)?;

    let report = sort_inputs(&config, &cli.inputs, &LogProgress)?;

    print!("{}", report.render_table());
    info!(
        batch_id = %report.batch_id,
        "Results written to {}",
        Path::new(&config.results_csv).display()
    );

    if !report.failures.is_empty() {
        eprintln!("{} file(s) could not be classified:", report.failures.len());
        for failure in &report.failures {
            eprintln!("  {}: {}", failure.filename, failure.error);
        }
    }

    Ok(())
}
