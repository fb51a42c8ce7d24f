//! CLI entrypoint for chartq
//!
//! Wires the layers together with dependency injection: the source
//! resolver and YAML reader feed the processing service, which records
//! the result in an in-memory session store and prints the generated
//! question document.

use anyhow::{Context, Result};
use chartq_application::ChartQuestionsService;
use chartq_infrastructure::{
    ChartSourceResolver, ConfigLoader, InMemorySessionStore, YamlChartReader,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

/// Generate an installer question document from a chart archive.
#[derive(Parser, Debug)]
#[command(name = "chartq", version, about)]
struct Cli {
    /// Chart reference: an http(s) URL to a .tgz archive, or oci://host/path[:version]
    reference: String,

    /// Output format for the question document
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    format: OutputFormat,

    /// Also print the parsed configuration tree
    #[arg(long)]
    values: bool,

    /// Path to an explicit configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip configuration files and use built-in defaults
    #[arg(long)]
    no_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("{e}"))
            .context("failed to load configuration")?
    };

    // === Dependency Injection ===
    let resolver = Arc::new(
        ChartSourceResolver::from_config(&config.source)
            .context("failed to initialize chart source resolver")?,
    );
    let reader = Arc::new(YamlChartReader::new());
    let sessions = Arc::new(InMemorySessionStore::new());

    let service = ChartQuestionsService::new(resolver, reader, sessions);

    let session = service.process(&cli.reference).await?;
    info!("Processed chart into session {}", session.id);

    if cli.values {
        match cli.format {
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&session.values)?),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&session.values)?),
        }
        println!("---");
    }

    match cli.format {
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&session.questions)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&session.questions)?),
    }

    Ok(())
}
