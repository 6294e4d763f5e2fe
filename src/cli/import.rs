//! Import command - create the spreadsheet's tests in the tracker

use crate::cli::progress::CliProgress;
use crate::cli::style::{Stylize, bullet, check};
use anstream::println;
use std::path::Path;
use xray_import::config::Settings;
use xray_import::error::Result;
use xray_import::sheet::load_records;
use xray_import::submit::import_records;
use xray_import::tracker::JiraService;
use xray_import::types::TestRecord;

/// Run the import command
pub async fn run_import(settings_path: &Path, dry_run: bool) -> Result<()> {
    let settings = Settings::load(settings_path)?;
    let records = load_records(&settings.excel_filepath)?;

    if records.is_empty() {
        println!(
            "No test records found in {}",
            settings.excel_filepath.display()
        );
        return Ok(());
    }

    println!(
        "Importing {} test{} into {}",
        records.len().accent(),
        if records.len() == 1 { "" } else { "s" },
        settings.project.emphasis()
    );
    println!();

    if dry_run {
        report_dry_run(&records);
        return Ok(());
    }

    let tracker = JiraService::new(&settings.url, &settings.token);
    let progress = CliProgress;
    let result = import_records(&records, &tracker, &settings, &progress).await?;

    println!();
    println!(
        "{} Created {} test{}",
        check(),
        result.created.len().accent(),
        if result.created.len() == 1 { "" } else { "s" }
    );
    if result.plan_links > 0 {
        println!(
            "{} Linked {} to test plans",
            check(),
            result.plan_links.accent()
        );
    }
    if result.execution_links > 0 {
        println!(
            "{} Linked {} to test executions",
            check(),
            result.execution_links.accent()
        );
    }

    Ok(())
}

/// Report what would be submitted without touching the network
fn report_dry_run(records: &[TestRecord]) {
    println!("{}", "Dry run - nothing will be created".muted());
    for record in records {
        let steps = record.steps.len();
        println!(
            "{} {} {}",
            bullet(),
            record.name.emphasis(),
            format!("({steps} step{})", if steps == 1 { "" } else { "s" }).muted()
        );
        if let Some(plan_key) = &record.plan_key {
            println!("    would add to test plan {}", plan_key.accent());
        }
        if let Some(execution_key) = &record.execution_key {
            println!("    would add to test execution {}", execution_key.accent());
        }
    }
}
