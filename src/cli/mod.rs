//! CLI commands
//!
//! Command implementations for the `xray-import` binary.

mod check;
mod import;
mod inspect;
mod progress;
pub mod style;

pub use check::run_check;
pub use import::run_import;
pub use inspect::run_inspect;
