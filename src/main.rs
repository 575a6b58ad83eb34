//! # wakfu-data
//!
//! Refreshes the local copy of Wakfu's `items.json` from the Ankama game-data CDN.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use wakfu_data::config::{
    DEFAULT_BASE_URL, DEFAULT_CONFIG_ENDPOINT, DEFAULT_DATASET_FILENAME, DEFAULT_OUTPUT_PATH,
    DEFAULT_REQUEST_TIMEOUT, RefreshConfig,
};
use wakfu_data::error::RefreshError;
use wakfu_data::refresh::Refresher;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "wakfu-data: resolves the current Wakfu game-data version from the CDN's config.json,\n\
                  downloads the matching items.json and writes it, pretty-printed, to a local file."
)]
struct Args {
    /// URL of the JSON document carrying the current `version`
    #[arg(long, default_value = DEFAULT_CONFIG_ENDPOINT)]
    config_endpoint: String,

    /// Base URL; the dataset is fetched from <BASE_URL>/<version>/<DATASET>
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// File to download from the version directory
    #[arg(long, default_value = DEFAULT_DATASET_FILENAME)]
    dataset: String,

    /// Output file (its directory must already exist)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs(), value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Also write the resolved version to <OUTPUT>.version
    #[arg(long)]
    write_version: bool,

    /// Only print the current version; download nothing
    #[arg(long)]
    resolve_only: bool,

    /// Show the effective configuration and exit
    #[arg(long)]
    show_config: bool,
}

impl Args {
    fn refresh_config(&self) -> RefreshConfig {
        RefreshConfig {
            config_endpoint: self.config_endpoint.clone(),
            base_url: self.base_url.clone(),
            dataset_filename: self.dataset.clone(),
            output_path: self.output.clone(),
            request_timeout: Duration::from_secs(self.timeout),
            version_sidecar: self.write_version,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = args.refresh_config();

    if args.show_config {
        println!("Configuration:");
        println!("  Config endpoint: {}", config.config_endpoint);
        println!("  Dataset URL:     {}", config.dataset_url("<version>"));
        println!("  Output:          {}", config.output_path.display());
        println!("  Timeout:         {}s", config.request_timeout.as_secs());
        if config.version_sidecar {
            println!("  Version file:    {}", config.sidecar_path().display());
        }
        return Ok(());
    }

    let refresher = Refresher::new(config)?;

    if args.resolve_only {
        println!("{}", refresher.resolve_version()?);
        return Ok(());
    }

    let outcome = refresher.refresh()?;
    println!(
        "Saved {} to {}",
        outcome.dataset_url,
        outcome.output_path.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<RefreshError>()
                .map(RefreshError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
