//! Check command - verify settings and tracker authentication

use crate::cli::style::{Stylize, check, spinner_style};
use anstream::println;
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;
use xray_import::config::Settings;
use xray_import::error::Result;
use xray_import::tracker::{JiraService, TrackerService};

/// Run the check command
pub async fn run_check(settings_path: &Path) -> Result<()> {
    let settings = Settings::load(settings_path)?;

    println!("Settings loaded from {}", settings_path.display());
    println!("  tracker: {}", settings.url.accent());
    println!("  project: {}", settings.project.accent());
    println!(
        "  spreadsheet: {}",
        settings.excel_filepath.display().accent()
    );

    let spinner = ProgressBar::new_spinner().with_style(spinner_style());
    spinner.set_message("Checking tracker authentication...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let tracker = JiraService::new(&settings.url, &settings.token);
    let user = tracker.current_user().await;
    spinner.finish_and_clear();

    let user = user?;
    println!("{} Authenticated as {}", check(), user.emphasis());
    Ok(())
}
