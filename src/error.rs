//! Error types for xray-import

use crate::types::LinkTarget;
use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// All failure classes of an import run
///
/// Every error is fatal: the run aborts on the first failure, and issues
/// already created in the tracker are left as they are.
#[derive(Debug, Error)]
pub enum Error {
    /// The settings file could not be read or parsed
    #[error("failed to load settings from {path}: {reason}")]
    Config {
        /// Path of the settings file
        path: String,
        /// What went wrong while reading it
        reason: String,
    },

    /// A required settings key is absent
    #[error("missing required setting '{0}' in the DEFAULT section")]
    MissingSetting(&'static str),

    /// The configured tracker URL is not a valid http(s) URL
    #[error("invalid tracker url '{url}': {reason}")]
    InvalidUrl {
        /// The URL as configured
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The workbook could not be opened or read
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// The workbook has no worksheets
    #[error("workbook has no worksheets")]
    EmptyWorkbook,

    /// A step row appeared before any row with a test name
    #[error("row {row}: step row appears before any row with a test name")]
    OrphanRow {
        /// 1-based spreadsheet row number
        row: usize,
    },

    /// A link operation was attempted before the test was created
    #[error("test must be created before adding it to a {0}")]
    TestNotCreated(LinkTarget),

    /// The tracker answered with a non-success status
    #[error("tracker request failed with status {status}: {body}")]
    Request {
        /// HTTP status code of the response
        status: reqwest::StatusCode,
        /// Response body text
        body: String,
    },

    /// Transport-level HTTP failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The tracker returned a response we could not interpret
    #[error("unexpected tracker response: {0}")]
    TrackerApi(String),
}
