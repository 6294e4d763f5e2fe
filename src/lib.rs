//! xray-import - Create Xray manual tests in Jira from an Excel sheet
//!
//! Reads structured test-case definitions from a workbook, groups the flat
//! rows into multi-step test records, and publishes each record as a manual
//! "Test" issue, optionally linking it to a test plan and/or test execution.

pub mod config;
pub mod error;
pub mod sheet;
pub mod submit;
pub mod tracker;
pub mod types;
