use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use rate_tracker::{
    AppConfig, CssExtractor, EmailNotifier, PipelineRunner, RunMode, SourceFetcher,
};

/// Track product prices and email a report.
#[derive(Debug, Parser)]
#[command(name = "rate-tracker", version, about)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(long)]
    config: PathBuf,

    /// Print the report instead of sending it
    #[arg(long)]
    dry_run: bool,

    /// Number of products fetched at the same time (overrides the config file)
    #[arg(long)]
    concurrency: Option<usize>,

    /// Email subject (overrides the config file)
    #[arg(long)]
    subject: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rate_tracker=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    let fetcher = SourceFetcher::new(&config.fetch)?;
    let notifier = EmailNotifier::new(&config.smtp);
    let runner = PipelineRunner::new(fetcher, CssExtractor::new(), notifier)
        .concurrency(cli.concurrency.unwrap_or(config.fetch.concurrency))
        .subject(cli.subject.unwrap_or(config.report.subject));

    let mode = if cli.dry_run {
        RunMode::ReportOnly
    } else {
        RunMode::Deliver
    };

    let mut stdout = std::io::stdout().lock();
    let summary = runner.run(&config.products, mode, &mut stdout).await?;

    info!(
        "Finished: {} product(s), {} fetch failure(s)",
        summary.report.outcomes().len(),
        summary.report.failures()
    );
    Ok(())
}
