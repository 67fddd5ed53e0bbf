//! healthcheck - evaluate health-check documents as a Nagios plugin
//!
//! Reads one or more health documents, merges them and reports the result.

#![allow(missing_docs)]

use anyhow::Context;
use clap::{Parser, ValueEnum};
use health_rs::config::Config;
use health_rs::health::validate_json;
use health_rs::utils::init_logging;
use health_rs::{Check, MonitoringSink, NagiosCheck, NagiosStatus, translate_check};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Plugin line with performance data
    Nagios,
    /// Full normalized document
    Json,
    /// Overall status only
    Terse,
}

#[derive(Parser, Debug)]
#[command(
    name = "healthcheck",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about = "Evaluate health-check JSON documents"
)]
struct Cli {
    /// Documents to read; `-` reads standard input
    #[arg(required = true, value_name = "FILE")]
    documents: Vec<PathBuf>,

    /// YAML configuration file
    #[arg(long, short, env = "HEALTH_CONFIG")]
    config: Option<PathBuf>,

    /// Seconds after which a timestamped record is stale
    #[arg(long, value_name = "SECONDS")]
    max_age: Option<i64>,

    /// Report OK records too
    #[arg(long, short)]
    verbose: bool,

    /// Validate each document before evaluating it
    #[arg(long)]
    validate: bool,

    /// Prefix merged record names with the source file stem
    #[arg(long)]
    prefixed: bool,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Nagios)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            println!("{}: {:#}", NagiosStatus::Unknown, e);
            ExitCode::from(NagiosStatus::Unknown.exit_code())
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(&cli).await?;
    init_logging(&config.logging)?;
    debug!(?config, "Effective configuration");

    let mut documents = cli.documents.iter();
    let first = documents.next().context("no documents given")?;
    let mut check = read_check(first, config.check.validate).await?;

    for path in documents {
        let other = read_check(path, config.check.validate).await?;
        if config.check.prefixed_merge {
            check.prefixed_merge(&source_name(path), &other);
        } else {
            check.merge(&other);
        }
    }

    info!(status = %check.overall_status(), documents = cli.documents.len(), "Evaluated health");

    let code = match cli.format {
        OutputFormat::Nagios => {
            let mut sink = NagiosCheck::new();
            translate_check(&mut sink, &check, config.check.max_age_seconds, config.check.verbose)?;
            println!("{}", sink.output());
            sink.status().exit_code()
        }
        OutputFormat::Json => {
            println!("{}", check.to_json()?);
            NagiosStatus::from(check.overall_status()).exit_code()
        }
        OutputFormat::Terse => {
            println!("{}", check.terse()?);
            NagiosStatus::from(check.overall_status()).exit_code()
        }
    };

    Ok(ExitCode::from(code))
}

/// File config, then `HEALTH_*` variables, then flags
async fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let file = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::default(),
    };
    let mut config = file.merge(Config::from_env()?);

    if let Some(max_age) = cli.max_age {
        config.check.max_age_seconds = max_age;
    }
    config.check.verbose |= cli.verbose;
    config.check.validate |= cli.validate;
    config.check.prefixed_merge |= cli.prefixed;

    config.validate()?;
    Ok(config)
}

async fn read_check(path: &Path, validate: bool) -> anyhow::Result<Check> {
    let text = read_document(path).await?;
    if validate {
        validate_json(&text).with_context(|| format!("{} failed validation", path.display()))?;
    }
    Check::from_json(&text).with_context(|| format!("{} is not a health document", path.display()))
}

async fn read_document(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        return Ok(text);
    }
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

fn source_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        return "stdin".to_string();
    }
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
