//! Sequential import loop
//!
//! One builder per record, strictly in spreadsheet order, one request in
//! flight at a time. The first failure aborts the run; issues created for
//! earlier records remain in the tracker.

use crate::config::Settings;
use crate::error::Result;
use crate::submit::{ProgressCallback, TestSubmission};
use crate::tracker::TrackerService;
use crate::types::{CreatedIssue, LinkTarget, TestRecord};

/// Outcome of a completed import run
#[derive(Debug, Default)]
pub struct ImportResult {
    /// Issues created, in record order
    pub created: Vec<CreatedIssue>,
    /// Number of test-plan links performed
    pub plan_links: usize,
    /// Number of test-execution links performed
    pub execution_links: usize,
}

/// Submit every record through the tracker, in order.
///
/// Each record gets a fresh builder: all steps are added, the test is
/// created, then the plan and execution links happen only when the record
/// carries the corresponding key.
pub async fn import_records(
    records: &[TestRecord],
    tracker: &dyn TrackerService,
    settings: &Settings,
    progress: &dyn ProgressCallback,
) -> Result<ImportResult> {
    let mut result = ImportResult::default();

    for record in records {
        progress.on_record_started(record).await;

        let mut submission = TestSubmission::new(tracker, &settings.fields);
        for step in &record.steps {
            submission.add_step(step.clone());
        }

        submission
            .create_test(
                &settings.project,
                &record.name,
                &record.path,
                &record.description,
            )
            .await?;

        if let Some(issue) = submission.created() {
            progress
                .on_test_created(record, issue, &tracker.browse_url(&issue.key))
                .await;
            result.created.push(issue.clone());
        }

        if let Some(plan_key) = record.plan_key.as_deref() {
            submission.add_to_test_plan(plan_key).await?;
            progress.on_linked(LinkTarget::TestPlan, plan_key).await;
            result.plan_links += 1;
        }

        if let Some(execution_key) = record.execution_key.as_deref() {
            submission.add_to_test_execution(execution_key).await?;
            progress
                .on_linked(LinkTarget::TestExecution, execution_key)
                .await;
            result.execution_links += 1;
        }
    }

    Ok(result)
}
