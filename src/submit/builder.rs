//! Per-record submission builder
//!
//! State machine per test record: accumulate steps, create the test issue,
//! then optionally link it to a test plan and/or test execution. Each builder
//! instance serves exactly one record and is discarded afterwards.

use crate::config::CustomFields;
use crate::error::{Error, Result};
use crate::tracker::TrackerService;
use crate::types::{CreatedIssue, LinkTarget, TestStep};
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::info;

/// Issue type name for Xray manual tests
const ISSUE_TYPE: &str = "Test";

/// Value of the test-type custom field
const TEST_TYPE_MANUAL: &str = "Manual";

#[derive(Serialize)]
struct StepFields<'a> {
    action: &'a str,
    data: &'a str,
    #[serde(rename = "expected result")]
    expected_result: &'a str,
}

#[derive(Serialize)]
struct StepPayload<'a> {
    index: usize,
    fields: StepFields<'a>,
}

/// Builder that creates one manual test and links it
pub struct TestSubmission<'a> {
    tracker: &'a dyn TrackerService,
    fields: &'a CustomFields,
    steps: Vec<TestStep>,
    created: Option<CreatedIssue>,
}

impl std::fmt::Debug for TestSubmission<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestSubmission")
            .field("fields", &self.fields)
            .field("steps", &self.steps)
            .field("created", &self.created)
            .finish_non_exhaustive()
    }
}

impl<'a> TestSubmission<'a> {
    /// Start an empty submission against the given tracker
    pub fn new(tracker: &'a dyn TrackerService, fields: &'a CustomFields) -> Self {
        Self {
            tracker,
            fields,
            steps: Vec::new(),
            created: None,
        }
    }

    /// Append a step. Steps are numbered 1..N in insertion order.
    pub fn add_step(&mut self, step: TestStep) -> &mut Self {
        self.steps.push(step);
        self
    }

    /// The created issue, once [`Self::create_test`] has succeeded
    pub fn created(&self) -> Option<&CreatedIssue> {
        self.created.as_ref()
    }

    /// Create the test issue from the accumulated steps.
    ///
    /// Must be called before any link operation. Logs the created key and its
    /// browse URL on success.
    pub async fn create_test(
        &mut self,
        project_key: &str,
        summary: &str,
        test_path: &str,
        description: &str,
    ) -> Result<&mut Self> {
        let fields = self.issue_fields(project_key, summary, test_path, description);
        let issue = self.tracker.create_issue(&fields).await?;

        info!(
            key = %issue.key,
            "test created, visit {}",
            self.tracker.browse_url(&issue.key)
        );
        self.created = Some(issue);
        Ok(self)
    }

    /// Link the created test to a test plan
    pub async fn add_to_test_plan(&mut self, plan_key: &str) -> Result<&mut Self> {
        self.link(LinkTarget::TestPlan, plan_key).await
    }

    /// Link the created test to a test execution
    pub async fn add_to_test_execution(&mut self, execution_key: &str) -> Result<&mut Self> {
        self.link(LinkTarget::TestExecution, execution_key).await
    }

    async fn link(&mut self, target: LinkTarget, key: &str) -> Result<&mut Self> {
        let Some(created) = self.created.as_ref() else {
            return Err(Error::TestNotCreated(target));
        };
        self.tracker.add_test_to(target, key, &created.key).await?;
        Ok(self)
    }

    /// Assemble the issue-creation fields for the accumulated steps.
    fn issue_fields(
        &self,
        project_key: &str,
        summary: &str,
        test_path: &str,
        description: &str,
    ) -> Value {
        let mut fields = Map::new();
        fields.insert("project".to_string(), json!({ "key": project_key }));
        fields.insert("summary".to_string(), json!(summary));
        fields.insert(self.fields.test_path.clone(), json!(test_path));
        fields.insert("description".to_string(), json!(description));
        fields.insert("issuetype".to_string(), json!({ "name": ISSUE_TYPE }));
        fields.insert(
            self.fields.test_type.clone(),
            json!({ "value": TEST_TYPE_MANUAL }),
        );
        fields.insert(
            self.fields.test_steps.clone(),
            json!({ "steps": steps_payload(&self.steps) }),
        );
        Value::Object(fields)
    }
}

/// Number steps 1..N in input order, as the steps custom field expects.
fn steps_payload(steps: &[TestStep]) -> Vec<StepPayload<'_>> {
    steps
        .iter()
        .enumerate()
        .map(|(position, step)| StepPayload {
            index: position + 1,
            fields: StepFields {
                action: &step.action,
                data: &step.data,
                expected_result: &step.expected_result,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tracker stub for paths that must fail before any tracker call.
    struct UnreachableTracker;

    #[async_trait::async_trait]
    impl TrackerService for UnreachableTracker {
        async fn create_issue(&self, _fields: &Value) -> Result<CreatedIssue> {
            unreachable!("create_issue must not be called")
        }

        async fn add_test_to(&self, _target: LinkTarget, _key: &str, _test_key: &str) -> Result<()> {
            unreachable!("add_test_to must not be called")
        }

        async fn current_user(&self) -> Result<String> {
            unreachable!("current_user must not be called")
        }

        fn browse_url(&self, key: &str) -> String {
            format!("https://tracker.test/browse/{key}")
        }
    }

    fn step(action: &str, data: &str, result: &str) -> TestStep {
        TestStep {
            action: action.to_string(),
            data: data.to_string(),
            expected_result: result.to_string(),
        }
    }

    #[test]
    fn steps_are_numbered_from_one_in_input_order() {
        let steps = [step("a1", "d1", "r1"), step("a2", "d2", "r2")];
        let payload = serde_json::to_value(steps_payload(&steps)).unwrap();

        assert_eq!(
            payload,
            json!([
                { "index": 1, "fields": { "action": "a1", "data": "d1", "expected result": "r1" } },
                { "index": 2, "fields": { "action": "a2", "data": "d2", "expected result": "r2" } },
            ])
        );
    }

    #[test]
    fn issue_fields_carry_the_fixed_and_custom_fields() {
        let tracker = UnreachableTracker;
        let fields = CustomFields::default();
        let mut submission = TestSubmission::new(&tracker, &fields);
        submission.add_step(step("open app", "", "app opens"));

        let payload = submission.issue_fields("QA", "Login", "Auth/Login", "d");

        assert_eq!(payload["project"], json!({ "key": "QA" }));
        assert_eq!(payload["summary"], json!("Login"));
        assert_eq!(payload["description"], json!("d"));
        assert_eq!(payload["issuetype"], json!({ "name": "Test" }));
        assert_eq!(payload["customfield_12320"], json!("Auth/Login"));
        assert_eq!(payload["customfield_12310"], json!({ "value": "Manual" }));
        assert_eq!(
            payload["customfield_12314"]["steps"][0]["index"],
            json!(1)
        );
    }

    #[test]
    fn custom_field_ids_come_from_settings() {
        let tracker = UnreachableTracker;
        let fields = CustomFields {
            test_path: "customfield_1".to_string(),
            test_type: "customfield_2".to_string(),
            test_steps: "customfield_3".to_string(),
        };
        let mut submission = TestSubmission::new(&tracker, &fields);
        submission.add_step(step("open app", "", "app opens"));

        let payload = submission.issue_fields("QA", "Login", "Auth/Login", "d");

        assert_eq!(payload["customfield_1"], json!("Auth/Login"));
        assert_eq!(payload["customfield_2"], json!({ "value": "Manual" }));
        assert!(payload["customfield_3"]["steps"].is_array());
    }

    #[tokio::test]
    async fn linking_before_create_fails_with_test_not_created() {
        let tracker = UnreachableTracker;
        let fields = CustomFields::default();
        let mut submission = TestSubmission::new(&tracker, &fields);
        submission.add_step(step("open app", "", "app opens"));

        let err = submission.add_to_test_plan("PLAN-1").await.unwrap_err();
        assert!(matches!(err, Error::TestNotCreated(LinkTarget::TestPlan)));

        let err = submission.add_to_test_execution("EXEC-1").await.unwrap_err();
        assert!(matches!(
            err,
            Error::TestNotCreated(LinkTarget::TestExecution)
        ));
    }
}
