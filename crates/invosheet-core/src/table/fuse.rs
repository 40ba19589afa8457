//! Record fusion: metadata columns onto the detected table.

use crate::models::fields::InvoiceFields;
use crate::models::table::TableSheet;

/// Column carrying line-item amounts, reformatted during fusion.
const AMOUNT_COLUMN: &str = "AMOUNT";

/// Merge extracted metadata onto a detected table.
///
/// The three required fields become uniform columns on every row. The total
/// and subtotal columns exist only when the field itself does; an absent
/// field means no column, never a null-filled one. Amount cells gain a `$`
/// prefix when they carry a decimal point; a table without an `AMOUNT`
/// column passes through untouched.
pub fn fuse_fields(mut sheet: TableSheet, fields: &InvoiceFields) -> TableSheet {
    sheet.push_uniform_column("Invoice No.", &fields.number);
    sheet.push_uniform_column("Invoice Date", &fields.date);
    sheet.push_uniform_column("Invoice Address", &fields.address);

    if let Some(total) = &fields.total {
        sheet.push_uniform_column("Invoice Total", total);
    }
    if !fields.subtotals.is_empty() {
        sheet.push_uniform_column("Invoice Subtotal", &fields.subtotals.join(", "));
    }

    if let Some(col) = sheet.column_index(AMOUNT_COLUMN) {
        for row in &mut sheet.rows {
            if let Some(cell) = row.get_mut(col) {
                if cell.contains('.') {
                    cell.insert(0, '$');
                }
            }
        }
    }

    sheet
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_table() -> TableSheet {
        TableSheet {
            headers: vec!["# Description".to_string(), "AMOUNT".to_string()],
            rows: vec![
                vec!["Widget".to_string(), "12.50".to_string()],
                vec!["Gadget".to_string(), "3".to_string()],
                vec!["Sprocket".to_string(), "7.00".to_string()],
            ],
        }
    }

    fn sample_fields() -> InvoiceFields {
        InvoiceFields {
            number: "INV-1".to_string(),
            date: "2024-01-15".to_string(),
            address: "Acme Corp 5th Ave".to_string(),
            subtotals: vec!["10.00".to_string(), "2.50".to_string()],
            total: Some("22.50".to_string()),
        }
    }

    #[test]
    fn appends_metadata_columns_uniformly() {
        let fused = fuse_fields(sample_table(), &sample_fields());

        assert_eq!(
            fused.headers,
            vec![
                "# Description",
                "AMOUNT",
                "Invoice No.",
                "Invoice Date",
                "Invoice Address",
                "Invoice Total",
                "Invoice Subtotal",
            ]
        );
        assert_eq!(fused.row_count(), 3);
        for row in &fused.rows {
            assert_eq!(row[2], "INV-1");
            assert_eq!(row[3], "2024-01-15");
            assert_eq!(row[4], "Acme Corp 5th Ave");
            assert_eq!(row[5], "22.50");
            assert_eq!(row[6], "10.00, 2.50");
        }
    }

    #[test]
    fn decimal_point_is_the_sole_dollar_trigger() {
        let fused = fuse_fields(sample_table(), &sample_fields());

        let amounts: Vec<&str> = fused.rows.iter().map(|r| r[1].as_str()).collect();
        assert_eq!(amounts, vec!["$12.50", "3", "$7.00"]);
    }

    #[test]
    fn absent_total_omits_the_column() {
        let fields = InvoiceFields {
            total: None,
            ..sample_fields()
        };

        let fused = fuse_fields(sample_table(), &fields);
        assert!(!fused.headers.iter().any(|h| h == "Invoice Total"));
    }

    #[test]
    fn empty_subtotals_omit_the_column() {
        let fields = InvoiceFields {
            subtotals: Vec::new(),
            ..sample_fields()
        };

        let fused = fuse_fields(sample_table(), &fields);
        assert!(!fused.headers.iter().any(|h| h == "Invoice Subtotal"));
    }

    #[test]
    fn missing_amount_column_is_a_no_op() {
        let table = TableSheet {
            headers: vec!["# Description".to_string()],
            rows: vec![vec!["Widget".to_string()]],
        };

        let fused = fuse_fields(table, &sample_fields());
        assert_eq!(fused.rows[0][0], "Widget");
        assert_eq!(fused.row_count(), 1);
    }
}
