//! Core types for xray-import

use serde::Deserialize;
use std::fmt;

/// One manual test step
///
/// Order within the parent record is significant: it maps to the 1-based
/// `index` in the steps payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestStep {
    /// What the tester does
    pub action: String,
    /// Input data for the step
    pub data: String,
    /// What the tester should observe
    pub expected_result: String,
}

/// A manual test case parsed from the spreadsheet
///
/// Built entirely during parsing and read-only afterward. Every record has at
/// least one step: the row that opens it always contributes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    /// Test name, used as the issue summary
    pub name: String,
    /// Test path (folder) within the tracker
    pub path: String,
    /// Issue description
    pub description: String,
    /// Ordered steps
    pub steps: Vec<TestStep>,
    /// Test plan to link the created test to, if any
    pub plan_key: Option<String>,
    /// Test execution to link the created test to, if any
    pub execution_key: Option<String>,
}

/// The tracker's record of a created issue
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreatedIssue {
    /// Internal issue id
    pub id: String,
    /// Issue key, e.g. `QA-42`
    pub key: String,
    /// REST self link
    #[serde(rename = "self")]
    pub self_url: String,
}

/// Which Xray entity a created test is being linked to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// A test plan
    TestPlan,
    /// A test execution
    TestExecution,
}

impl LinkTarget {
    /// Path segment used by the raven link endpoint
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::TestPlan => "testplan",
            Self::TestExecution => "testexec",
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TestPlan => write!(f, "test plan"),
            Self::TestExecution => write!(f, "test execution"),
        }
    }
}
