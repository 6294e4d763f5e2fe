//! Per-record submission engine
//!
//! Handles the workflow of publishing parsed test records:
//! accumulate steps, create the test issue, link it to a plan and/or
//! execution when the record asks for it.

mod builder;
mod progress;
mod run;

pub use builder::TestSubmission;
pub use progress::{NoopProgress, ProgressCallback};
pub use run::{ImportResult, import_records};
