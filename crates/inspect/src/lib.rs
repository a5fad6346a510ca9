use anyhow::{Context, Result};
use clap::Parser;
use models::{DecodeConfig, DecodeMode, DecodedResponse, ResponseKind};
use std::path::{Path, PathBuf};
use tracing::{Subscriber, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Decode a saved Discovery response into its typed model
#[derive(Debug, Parser)]
#[command(name = "inspect", version)]
pub struct Args {
    /// Response shape of the file, e.g. `query`, `list-collections` or `training-query-set`
    pub kind: ResponseKind,

    /// JSON file holding the response body
    pub file: PathBuf,

    /// Fail on aggregations of an unrecognized type
    #[arg(long)]
    pub strict: bool,

    /// Decode configuration file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the decoded model as indented JSON after the summary
    #[arg(long)]
    pub pretty: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Args {
    /// Config file, then environment, then `--strict`
    pub fn decode_config(&self) -> Result<DecodeConfig> {
        let config = match &self.config {
            Some(path) => DecodeConfig::from_file(path)?,
            None => DecodeConfig::default(),
        };
        let mut config = config.with_env_overrides()?;
        if self.strict {
            config.mode = DecodeMode::Strict;
        }
        Ok(config)
    }
}

/// Plain or JSON-lines formatter over `writer`, filtered by `filter`
pub fn build_subscriber<W>(
    json_logs: bool,
    filter: EnvFilter,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    if json_logs {
        Box::new(builder.json().finish())
    } else {
        Box::new(builder.finish())
    }
}

/// Install the global subscriber; `RUST_LOG` wins over the default `info` level
pub fn init_tracing(json_logs: bool) {
    // Logging may be already initialized when running under tests
    if tracing::dispatcher::has_been_set() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = build_subscriber(json_logs, filter, std::io::stderr);
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install log subscriber: {}", e);
    }
}

pub async fn decode_file(
    kind: ResponseKind,
    path: &Path,
    config: &DecodeConfig,
) -> Result<DecodedResponse> {
    let body = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    info!(kind = %kind, path = %path.display(), bytes = body.len(), "Decoding response file");

    models::decode(kind, &body, config)
}

/// Decode the file named by `args` and render the report printed to stdout
pub async fn run(args: &Args) -> Result<String> {
    let config = args.decode_config()?;
    let decoded = decode_file(args.kind, &args.file, &config).await?;

    let mut report = decoded.summary();
    if args.pretty {
        report.push('\n');
        report.push_str(&decoded.to_json_pretty()?);
    }
    Ok(report)
}
