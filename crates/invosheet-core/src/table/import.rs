//! Intermediate-workbook import.

use std::path::Path;

use calamine::{open_workbook_auto, DataType, Reader};
use tracing::debug;

use crate::error::TableError;
use crate::models::table::TableSheet;

/// Read the named table sheet from an intermediate workbook.
///
/// The first row is taken as the header row; remaining rows become data
/// rows, padded or truncated to the header width. An absent or unreadable
/// sheet is fatal for the page it belongs to.
pub fn read_table_sheet(path: &Path, sheet: &str) -> Result<TableSheet, TableError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| TableError::Open {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|_| TableError::MissingSheet {
            sheet: sheet.to_string(),
            path: path.to_path_buf(),
        })?;

    let mut row_iter = range.rows();
    let headers: Vec<String> = row_iter
        .next()
        .map(|row| {
            row.iter()
                .map(|cell| cell.as_string().unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();

    if headers.is_empty() {
        return Err(TableError::EmptySheet {
            sheet: sheet.to_string(),
            path: path.to_path_buf(),
        });
    }

    let width = headers.len();
    let rows: Vec<Vec<String>> = row_iter
        .map(|row| {
            let mut cells: Vec<String> = row
                .iter()
                .map(|cell| cell.as_string().unwrap_or_default())
                .collect();
            cells.resize(width, String::new());
            cells
        })
        .collect();

    debug!(
        "imported {} row(s) x {} column(s) from {}",
        rows.len(),
        width,
        path.display()
    );

    Ok(TableSheet { headers, rows })
}
