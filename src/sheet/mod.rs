//! Spreadsheet parsing
//!
//! Turns the flat rows of the input workbook into ordered [`TestRecord`]s.
//! The workbook I/O lives in [`reader`]; the grouping algorithm is a pure
//! function over extracted rows so it can be tested without files.

mod reader;

pub use reader::load_records;

use crate::error::{Error, Result};
use crate::types::{TestRecord, TestStep};

/// One data row of the input sheet, cells as trimmed text
///
/// Column order is fixed: test name, test path, description, action, data,
/// expected result, plan key, execution key. Blank and absent cells are empty
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    /// 1-based spreadsheet row number, for error reporting
    pub row: usize,
    /// Test name; non-empty opens a new record
    pub test_name: String,
    /// Test path (folder)
    pub test_path: String,
    /// Issue description
    pub description: String,
    /// Step action
    pub action: String,
    /// Step data
    pub data: String,
    /// Step expected result
    pub expected_result: String,
    /// Test plan key, if the test should be linked to one
    pub plan_key: String,
    /// Test execution key, if the test should be linked to one
    pub execution_key: String,
}

/// Group flat rows into test records, preserving row order.
///
/// A row with a non-empty test name flushes the open record (if any) and
/// opens a new one; every row, opening or continuing, contributes one step to
/// the open record. The final record is flushed after the last row.
///
/// # Errors
///
/// [`Error::OrphanRow`] if a continuation row appears before any row with a
/// test name. The reference implementation crashed here; we fail fast with
/// the offending row number instead of inventing a test name.
pub fn group_records(rows: impl IntoIterator<Item = SheetRow>) -> Result<Vec<TestRecord>> {
    let mut records = Vec::new();
    let mut current: Option<TestRecord> = None;

    for row in rows {
        if !row.test_name.is_empty() {
            if let Some(done) = current.take() {
                records.push(done);
            }
            current = Some(TestRecord {
                name: row.test_name.clone(),
                path: row.test_path.clone(),
                description: row.description.clone(),
                steps: Vec::new(),
                plan_key: non_empty(&row.plan_key),
                execution_key: non_empty(&row.execution_key),
            });
        }

        let Some(record) = current.as_mut() else {
            return Err(Error::OrphanRow { row: row.row });
        };
        record.steps.push(TestStep {
            action: row.action,
            data: row.data,
            expected_result: row.expected_result,
        });
    }

    if let Some(done) = current.take() {
        records.push(done);
    }
    Ok(records)
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
