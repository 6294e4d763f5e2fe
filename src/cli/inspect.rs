//! Inspect command - parse the spreadsheet and show the grouped records

use crate::cli::style::{Stylize, bullet};
use anstream::println;
use std::path::Path;
use xray_import::config::Settings;
use xray_import::error::Result;
use xray_import::sheet::load_records;

/// Run the inspect command
pub fn run_inspect(settings_path: &Path) -> Result<()> {
    let settings = Settings::load(settings_path)?;
    let records = load_records(&settings.excel_filepath)?;

    println!(
        "{} record{} in {}",
        records.len().accent(),
        if records.len() == 1 { "" } else { "s" },
        settings.excel_filepath.display()
    );

    for record in &records {
        println!("{} {}", bullet(), record.name.emphasis());
        if !record.path.is_empty() {
            println!("    path: {}", record.path.accent());
        }
        for (position, step) in record.steps.iter().enumerate() {
            println!(
                "    {}. {} {}",
                position + 1,
                step.action,
                format!("→ {}", step.expected_result).muted()
            );
        }
        if let Some(plan_key) = &record.plan_key {
            println!("    plan: {}", plan_key.accent());
        }
        if let Some(execution_key) = &record.execution_key {
            println!("    execution: {}", execution_key.accent());
        }
    }

    Ok(())
}
