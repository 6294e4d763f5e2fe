//! Tracker services
//!
//! The issue tracker is a black-box collaborator: the importer only needs
//! issue creation, the Xray link endpoint, and an authentication probe. The
//! trait keeps the submission logic testable without a live Jira.

mod jira;

pub use jira::JiraService;

use crate::error::Result;
use crate::types::{CreatedIssue, LinkTarget};
use async_trait::async_trait;

/// Tracker capability used by the submission builder
#[async_trait]
pub trait TrackerService: Send + Sync {
    /// Create an issue from prepared fields, returning the tracker's record of it
    async fn create_issue(&self, fields: &serde_json::Value) -> Result<CreatedIssue>;

    /// Add an existing test issue to a test plan or test execution
    async fn add_test_to(&self, target: LinkTarget, key: &str, test_key: &str) -> Result<()>;

    /// Verify the configured token, returning the authenticated user's name
    async fn current_user(&self) -> Result<String>;

    /// Web URL for browsing an issue
    fn browse_url(&self, key: &str) -> String;
}
