//! Tabular record set produced by the table-detection collaborator.

/// A rectangular record set: named columns and ordered rows of cell text.
///
/// Cells are kept as strings; the pipeline never interprets cell values
/// beyond the amount-formatting rule applied during fusion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSheet {
    /// Column headers, in sheet order.
    pub headers: Vec<String>,

    /// Data rows. Each row has one cell per header.
    pub rows: Vec<Vec<String>>,
}

impl TableSheet {
    /// Index of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Append a column with the same value repeated on every row.
    pub fn push_uniform_column(&mut self, header: impl Into<String>, value: &str) {
        self.headers.push(header.into());
        for row in &mut self.rows {
            row.push(value.to_string());
        }
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_column_reaches_every_row() {
        let mut sheet = TableSheet {
            headers: vec!["A".to_string()],
            rows: vec![vec!["1".to_string()], vec!["2".to_string()]],
        };

        sheet.push_uniform_column("B", "x");

        assert_eq!(sheet.headers, vec!["A", "B"]);
        assert!(sheet.rows.iter().all(|row| row[1] == "x"));
        assert_eq!(sheet.row_count(), 2);
    }

    #[test]
    fn column_index_is_exact_match() {
        let sheet = TableSheet {
            headers: vec!["AMOUNT".to_string(), "amount".to_string()],
            rows: Vec::new(),
        };

        assert_eq!(sheet.column_index("AMOUNT"), Some(0));
        assert_eq!(sheet.column_index("amount"), Some(1));
        assert_eq!(sheet.column_index("Amount"), None);
    }
}
