//! Output workbook accumulation.

use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::info;

use crate::error::WorkbookError;
use crate::models::table::TableSheet;

/// The run-wide output artifact: one sheet per processed page image.
///
/// Sheets accumulate in memory and the file is written exactly once by
/// [`OutputWorkbook::save`]; no file handle outlives a single save.
#[derive(Debug, Default)]
pub struct OutputWorkbook {
    sheets: Vec<(String, TableSheet)>,
}

impl OutputWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the sheet holding the results of image `index`.
    pub fn sheet_name(index: usize) -> String {
        format!("Results_{index}")
    }

    /// Append a fused record set under the given sheet name.
    pub fn add_sheet(&mut self, name: impl Into<String>, sheet: TableSheet) {
        self.sheets.push((name.into(), sheet));
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Write the workbook to disk: header row first, data rows below.
    pub fn save(&self, path: &Path) -> Result<(), WorkbookError> {
        let mut workbook = Workbook::new();

        for (name, table) in &self.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(name)?;

            for (col, header) in table.headers.iter().enumerate() {
                worksheet.write_string(0, col as u16, header)?;
            }
            for (row_idx, row) in table.rows.iter().enumerate() {
                for (col, cell) in row.iter().enumerate() {
                    worksheet.write_string(row_idx as u32 + 1, col as u16, cell)?;
                }
            }
        }

        workbook.save(path)?;
        info!("wrote {} sheet(s) to {}", self.sheets.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use calamine::{open_workbook_auto, DataType, Reader};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sheet_names_follow_the_image_index() {
        assert_eq!(OutputWorkbook::sheet_name(0), "Results_0");
        assert_eq!(OutputWorkbook::sheet_name(12), "Results_12");
    }

    #[test]
    fn saved_workbook_round_trips() {
        let table = TableSheet {
            headers: vec!["A".to_string(), "B".to_string()],
            rows: vec![vec!["1".to_string(), "2".to_string()]],
        };

        let mut output = OutputWorkbook::new();
        output.add_sheet(OutputWorkbook::sheet_name(0), table);
        assert_eq!(output.sheet_count(), 1);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        output.save(&path).unwrap();

        let mut workbook = open_workbook_auto(&path).unwrap();
        let range = workbook.worksheet_range("Results_0").unwrap();
        let cells: Vec<Vec<String>> = range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|c| c.as_string().unwrap_or_default())
                    .collect()
            })
            .collect();

        assert_eq!(
            cells,
            vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["1".to_string(), "2".to_string()],
            ]
        );
    }
}
