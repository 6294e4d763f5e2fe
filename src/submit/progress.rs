//! Progress reporting for an import run

use crate::types::{CreatedIssue, LinkTarget, TestRecord};
use async_trait::async_trait;

/// Callback interface for observing an import run
///
/// The CLI installs a styled implementation; tests use [`NoopProgress`].
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// A record is about to be submitted
    async fn on_record_started(&self, record: &TestRecord);

    /// A test issue was created for a record
    async fn on_test_created(&self, record: &TestRecord, issue: &CreatedIssue, browse_url: &str);

    /// The created test was linked to a plan or execution
    async fn on_linked(&self, target: LinkTarget, key: &str);

    /// Free-form status message
    async fn on_message(&self, message: &str);
}

/// Progress callback that ignores everything
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_record_started(&self, _record: &TestRecord) {}

    async fn on_test_created(
        &self,
        _record: &TestRecord,
        _issue: &CreatedIssue,
        _browse_url: &str,
    ) {
    }

    async fn on_linked(&self, _target: LinkTarget, _key: &str) {}

    async fn on_message(&self, _message: &str) {}
}
