//! Styled CLI progress callback for import runs

use crate::cli::style::{Stream, Stylize, check, hyperlink_url};
use anstream::println;
use async_trait::async_trait;
use xray_import::submit::ProgressCallback;
use xray_import::types::{CreatedIssue, LinkTarget, TestRecord};

/// Progress callback that prints styled per-record status lines
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_record_started(&self, record: &TestRecord) {
        let steps = record.steps.len();
        println!(
            "{} {}",
            record.name.emphasis(),
            format!("({steps} step{})", if steps == 1 { "" } else { "s" }).muted()
        );
    }

    async fn on_test_created(&self, _record: &TestRecord, issue: &CreatedIssue, browse_url: &str) {
        println!("  {} Created {}", check(), issue.key.accent());
        println!("    {}", hyperlink_url(Stream::Stdout, browse_url));
    }

    async fn on_linked(&self, target: LinkTarget, key: &str) {
        println!("  {} Added to {target} {}", check(), key.accent());
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}
