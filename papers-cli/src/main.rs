use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use papers_client::export::{render_records, save_csv};
use papers_client::{ClientConfig, Pipeline, PublicationRecord};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(
    name = "get-papers-list",
    version,
    about = "Fetch PubMed papers and save details as CSV",
    long_about = "Search PubMed and list papers with at least one author affiliated \
                  with a pharmaceutical or biotech company"
)]
struct Cli {
    /// Query to search PubMed papers (full PubMed query syntax)
    #[arg(value_name = "QUERY")]
    query: String,

    /// Print debug information during execution
    #[arg(short, long)]
    debug: bool,

    /// Save results as CSV to this file (default: print to console)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// API key for NCBI E-utilities
    #[arg(long, env = "NCBI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "get-papers-list")]
    tool: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new()
            .with_tool(&self.tool)
            .with_timeout_seconds(self.timeout);

        if let Some(key) = &self.api_key {
            config = config.with_api_key(key);
        }

        if let Some(email) = &self.email {
            config = config.with_email(email);
        }

        config
    }

    fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let pipeline = Pipeline::new(cli.client_config())?;

    tracing::debug!(query = %cli.query, "Fetching papers for query");
    let records = pipeline.run(&cli.query).await?;

    write_output(cli, &records)
}

fn write_output(cli: &Cli, records: &[PublicationRecord]) -> Result<()> {
    match &cli.file {
        Some(path) => {
            save_csv(records, path)?;
            tracing::info!(
                path = %path.display(),
                records = records.len(),
                "Data saved to {}",
                path.display()
            );
        }
        None => render_records(records, io::stdout().lock())?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(cli.log_filter()))
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Error occurred: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
