//! Mock tracker service for testing
//!
//! These are test utilities - not all may be used in every test file.

#![allow(dead_code)]

use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use xray_import::error::{Error, Result};
use xray_import::tracker::TrackerService;
use xray_import::types::{CreatedIssue, LinkTarget};

/// Call record for `add_test_to`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCall {
    pub target: LinkTarget,
    pub key: String,
    pub test_key: String,
}

/// Simple mock tracker for testing
///
/// Features:
/// - Auto-incrementing issue keys (`QA-1`, `QA-2`, ...)
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockTracker {
    key_prefix: String,
    next_issue: AtomicU64,
    create_calls: Mutex<Vec<serde_json::Value>>,
    link_calls: Mutex<Vec<LinkCall>>,
    error_on_create: Mutex<Option<String>>,
    error_on_link: Mutex<Option<(u16, String)>>,
}

impl MockTracker {
    /// Create a mock issuing keys with the given project prefix
    pub fn new(key_prefix: &str) -> Self {
        Self {
            key_prefix: key_prefix.to_string(),
            next_issue: AtomicU64::new(1),
            create_calls: Mutex::new(Vec::new()),
            link_calls: Mutex::new(Vec::new()),
            error_on_create: Mutex::new(None),
            error_on_link: Mutex::new(None),
        }
    }

    /// Make `create_issue` return a tracker error
    pub fn fail_create(&self, msg: &str) {
        *self.error_on_create.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `add_test_to` return a request error with the given status/body
    pub fn fail_link(&self, status: u16, body: &str) {
        *self.error_on_link.lock().unwrap() = Some((status, body.to_string()));
    }

    /// Get all `create_issue` field payloads, in call order
    pub fn create_calls(&self) -> Vec<serde_json::Value> {
        self.create_calls.lock().unwrap().clone()
    }

    /// Get all `add_test_to` calls, in call order
    pub fn link_calls(&self) -> Vec<LinkCall> {
        self.link_calls.lock().unwrap().clone()
    }

    /// Get the link calls for one target only
    pub fn link_calls_for(&self, target: LinkTarget) -> Vec<LinkCall> {
        self.link_calls()
            .into_iter()
            .filter(|call| call.target == target)
            .collect()
    }
}

#[async_trait]
impl TrackerService for MockTracker {
    async fn create_issue(&self, fields: &serde_json::Value) -> Result<CreatedIssue> {
        self.create_calls.lock().unwrap().push(fields.clone());

        if let Some(msg) = self.error_on_create.lock().unwrap().as_ref() {
            return Err(Error::TrackerApi(msg.clone()));
        }

        let number = self.next_issue.fetch_add(1, Ordering::SeqCst);
        let key = format!("{}-{number}", self.key_prefix);
        Ok(CreatedIssue {
            id: format!("{}", 10000 + number),
            key: key.clone(),
            self_url: format!("https://tracker.test/rest/api/2/issue/{key}"),
        })
    }

    async fn add_test_to(&self, target: LinkTarget, key: &str, test_key: &str) -> Result<()> {
        self.link_calls.lock().unwrap().push(LinkCall {
            target,
            key: key.to_string(),
            test_key: test_key.to_string(),
        });

        if let Some((status, body)) = self.error_on_link.lock().unwrap().as_ref() {
            return Err(Error::Request {
                status: StatusCode::from_u16(*status).unwrap(),
                body: body.clone(),
            });
        }

        Ok(())
    }

    async fn current_user(&self) -> Result<String> {
        Ok("mock-user".to_string())
    }

    fn browse_url(&self, key: &str) -> String {
        format!("https://tracker.test/browse/{key}")
    }
}
