//! Jira/Xray tracker service implementation

use crate::error::{Error, Result};
use crate::tracker::TrackerService;
use crate::types::{CreatedIssue, LinkTarget};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Jira REST v2 plus the Xray raven endpoints, over reqwest
pub struct JiraService {
    client: Client,
    base_url: String,
    token: String,
}

#[derive(Serialize)]
struct CreateIssuePayload<'a> {
    fields: &'a serde_json::Value,
}

#[derive(Serialize)]
struct LinkPayload<'a> {
    add: [&'a str; 1],
}

#[derive(Deserialize)]
struct Myself {
    name: Option<String>,
    #[serde(rename = "displayName")]
    display_name: Option<String>,
}

impl JiraService {
    /// Create a new service for a base URL and bearer token
    pub fn new(base_url: &str, token: &str) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Turn a non-success response into an error carrying status and body.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Error::Request { status, body })
    }
}

#[async_trait]
impl TrackerService for JiraService {
    async fn create_issue(&self, fields: &serde_json::Value) -> Result<CreatedIssue> {
        let url = self.api_url("/rest/api/2/issue");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&CreateIssuePayload { fields })
            .send()
            .await?;

        let issue = Self::check_status(response)
            .await?
            .json::<CreatedIssue>()
            .await?;
        Ok(issue)
    }

    async fn add_test_to(&self, target: LinkTarget, key: &str, test_key: &str) -> Result<()> {
        let url = self.api_url(&format!(
            "/rest/raven/1.0/api/{}/{key}/test",
            target.path_segment()
        ));

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&LinkPayload { add: [test_key] })
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<String> {
        let url = self.api_url("/rest/api/2/myself");

        let response = self.client.get(&url).bearer_auth(&self.token).send().await?;
        let me: Myself = Self::check_status(response).await?.json().await?;

        me.display_name
            .or(me.name)
            .ok_or_else(|| Error::TrackerApi("myself response has no user name".to_string()))
    }

    fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{key}", self.base_url)
    }
}
