//! Metadata parser running every field extractor over one page's text.

use tracing::debug;

use crate::models::fields::InvoiceFields;

use super::rules::{extract_address, extract_date, extract_number, extract_subtotals, extract_total};
use super::Result;

/// Extracts the full invoice metadata record from normalized OCR text.
///
/// Required fields (number, date, address) fail the parse when their pattern
/// lists are exhausted; subtotal and total come back as absence markers
/// instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataParser;

impl MetadataParser {
    pub fn new() -> Self {
        Self
    }

    /// Run all five field extractors over normalized text.
    pub fn parse(&self, text: &str) -> Result<InvoiceFields> {
        let number = extract_number(text)?;
        let date = extract_date(text)?;
        let address = extract_address(text)?;
        let subtotals = extract_subtotals(text);
        let total = extract_total(text);

        debug!(
            "extracted invoice {} ({} subtotal line(s), total {})",
            number,
            subtotals.len(),
            if total.is_some() { "present" } else { "absent" }
        );

        Ok(InvoiceFields {
            number,
            date,
            address,
            subtotals,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::error::ExtractionError;

    use super::*;

    const LABELED_INVOICE: &str = "\
Acme Supplies Ltd
Invoice Number: INV-2024-001
Invoice Date: 2024-01-15
Shipped To): Acme Corp
5th Ave # Description
Subtotal: 120.00
Subtotal: 30.50
Total Amounts (INR) Due 15000.00
";

    #[test]
    fn parses_a_complete_labeled_invoice() {
        let fields = MetadataParser::new().parse(LABELED_INVOICE).unwrap();

        assert_eq!(fields.number, "INV-2024-001");
        assert_eq!(fields.date, "2024-01-15");
        assert_eq!(fields.address, "Acme Corp 5th Ave");
        assert_eq!(fields.subtotals, vec!["120.00", "30.50"]);
        assert_eq!(fields.total, Some("15000.00".to_string()));
    }

    #[test]
    fn optional_fields_come_back_absent_not_failed() {
        let text = "\
Invoice Number: 7
Invoice Date: 01/02/2024
BILL TO
Somewhere 12
SHIP DATE
";
        let fields = MetadataParser::new().parse(text).unwrap();

        assert!(fields.subtotals.is_empty());
        assert_eq!(fields.total, None);
    }

    #[test]
    fn missing_required_field_fails_the_parse() {
        let text = "Invoice Date: 2024-01-15\nBILL TO x SHIP DATE";
        let err = MetadataParser::new().parse(text).unwrap_err();
        assert!(matches!(err, ExtractionError::MissingField("invoice number")));
    }
}
