//! Workbook reading via calamine

use crate::error::{Error, Result};
use crate::sheet::{SheetRow, group_records};
use crate::types::TestRecord;
use calamine::{Data, Reader, Xlsx, open_workbook};
use std::path::Path;

/// Load and group the test records from the workbook's first sheet.
///
/// Row 1 is a header and is skipped unconditionally; data starts at row 2.
pub fn load_records(path: &Path) -> Result<Vec<TestRecord>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(Error::EmptyWorkbook)??;

    let rows = range.rows().enumerate().skip(1).map(|(idx, cells)| SheetRow {
        row: idx + 1,
        test_name: cell_text(cells, 0),
        test_path: cell_text(cells, 1),
        description: cell_text(cells, 2),
        action: cell_text(cells, 3),
        data: cell_text(cells, 4),
        expected_result: cell_text(cells, 5),
        plan_key: cell_text(cells, 6),
        execution_key: cell_text(cells, 7),
    });

    group_records(rows)
}

/// Cell content as trimmed text; absent and empty cells become `""`.
fn cell_text(cells: &[Data], idx: usize) -> String {
    cells
        .get(idx)
        .map(|cell| cell.to_string().trim().to_string())
        .unwrap_or_default()
}
