//! appraise - property valuation and market analytics in the terminal
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use appraise::HeadlessCommand;
use appraise_api::ApiClient;
use appraise_app::config::{self, Settings};
use appraise_core::prelude::*;
use clap::{Parser, Subcommand};

/// appraise - property valuation and market analytics in the terminal
#[derive(Parser, Debug)]
#[command(name = "appraise")]
#[command(about = "Terminal client for residential property valuation", long_about = None)]
struct Args {
    /// Backend origin, e.g. http://localhost:5000 (overrides APPRAISE_API_URL and config)
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,

    /// Directory holding config.toml
    #[arg(long, value_name = "DIR", global = true)]
    config_dir: Option<PathBuf>,

    /// Run one operation headless (NDJSON output, no TUI)
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the backend is reachable
    Ping,
    /// List the locations the backend accepts
    Locations,
    /// Print the market snapshot
    Analytics,
    /// Request one valuation
    Estimate {
        /// Total area in square feet
        #[arg(long)]
        area: String,
        /// Number of bedrooms
        #[arg(long)]
        bhk: String,
        /// Location name as listed by `appraise locations`
        #[arg(long)]
        location: String,
    },
    /// Write a commented default config.toml
    InitConfig,
}

impl Command {
    fn headless(self) -> Option<HeadlessCommand> {
        match self {
            Command::Ping => Some(HeadlessCommand::Ping),
            Command::Locations => Some(HeadlessCommand::Locations),
            Command::Analytics => Some(HeadlessCommand::Analytics),
            Command::Estimate {
                area,
                bhk,
                location,
            } => Some(HeadlessCommand::Estimate {
                area,
                bhk,
                location,
            }),
            Command::InitConfig => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file; stdout belongs to the TUI or to NDJSON output
    appraise_core::logging::init()?;

    let config_dir = args.config_dir.unwrap_or_else(config::default_config_dir);

    let Some(command) = args.command else {
        let (settings, client) = connect(&config_dir, args.api_url.as_deref())?;
        return finish(appraise::run(settings, client).await);
    };

    match command.headless() {
        Some(headless) => {
            let (_, client) = connect(&config_dir, args.api_url.as_deref())?;
            let base_url = client.base_url().to_string();
            finish(appraise::run_headless(&client, &base_url, headless).await)
        }
        None => {
            config::init_config_dir(&config_dir)?;
            eprintln!("Config written to {}", config_dir.join("config.toml").display());
            Ok(())
        }
    }
}

/// Load settings and build the single client used for the whole run
fn connect(config_dir: &std::path::Path, api_url: Option<&str>) -> Result<(Settings, ApiClient)> {
    let settings = config::load_settings(config_dir);
    let base_url = config::resolve_base_url(api_url, &settings);
    let client = ApiClient::new(&base_url)?;
    info!("Backend: {}", client.base_url());
    Ok((settings, client))
}

fn finish(result: Result<()>) -> Result<()> {
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    info!("appraise exiting");
    result
}
