//! Workbook and settings fixtures
//!
//! These are test utilities - not all may be used in every test file.

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// Header row of the input sheet, in the fixed column order
pub const HEADER: [&str; 8] = [
    "Test Name",
    "Test Path",
    "Description",
    "Action",
    "Data",
    "Expected Result",
    "Plan Key",
    "Execution Key",
];

/// Write an xlsx with the standard header and the given data rows.
pub fn write_workbook(dir: &Path, name: &str, rows: &[[&str; 8]]) -> PathBuf {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, title) in HEADER.iter().enumerate() {
        sheet.write_string(0, col as u16, *title).unwrap();
    }
    for (row, cells) in rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            sheet
                .write_string(row as u32 + 1, col as u16, *cell)
                .unwrap();
        }
    }

    let path = dir.join(name);
    workbook.save(&path).unwrap();
    path
}

/// Write a settings.ini pointing at the given workbook.
pub fn write_settings(dir: &Path, url: &str, excel: &Path) -> PathBuf {
    let path = dir.join("settings.ini");
    std::fs::write(
        &path,
        format!(
            "[DEFAULT]\n\
             url = {url}\n\
             project = QA\n\
             excel_filepath = {}\n\
             token = secret-token\n",
            excel.display()
        ),
    )
    .unwrap();
    path
}
