//! xray-import - Create Xray manual tests in Jira from an Excel sheet
//!
//! CLI binary for importing spreadsheet test definitions into a tracker.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use xray_import::config::DEFAULT_SETTINGS_PATH;

mod cli;

#[derive(Parser)]
#[command(name = "xray-import")]
#[command(about = "Import manual test cases from Excel into Jira/Xray")]
#[command(version)]
struct Cli {
    /// Path to the settings file
    #[arg(short, long, global = true, default_value = DEFAULT_SETTINGS_PATH)]
    settings: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the spreadsheet and create the tests in the tracker
    Import {
        /// Dry run - parse and report without calling the tracker
        #[arg(long)]
        dry_run: bool,
    },

    /// Parse the spreadsheet and print the grouped records
    Inspect,

    /// Verify settings and tracker authentication
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        // Default: a plain run imports, like the script this replaces
        None => cli::run_import(&cli.settings, false).await?,
        Some(Commands::Import { dry_run }) => cli::run_import(&cli.settings, dry_run).await?,
        Some(Commands::Inspect) => cli::run_inspect(&cli.settings)?,
        Some(Commands::Check) => cli::run_check(&cli.settings).await?,
    }

    Ok(())
}

/// Keep the app at info and the HTTP stack at error unless `RUST_LOG` says
/// otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqwest=error,hyper=error,hyper_util=error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
