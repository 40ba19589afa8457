//! Extracted invoice metadata.

use serde::{Deserialize, Serialize};

/// Invoice-level metadata extracted from one page's recognized text.
///
/// The number, date and address are required: their extractors fail rather
/// than produce an empty value. Subtotal and total are optional and carry
/// explicit absence markers (`Vec::is_empty`, `Option::None`) instead of
/// empty-string sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceFields {
    /// Invoice number.
    pub number: String,

    /// Invoice date, verbatim as printed on the invoice.
    pub date: String,

    /// Shipping/billing address after token de-duplication.
    pub address: String,

    /// Subtotal line values, in text order. Empty when the invoice has none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtotals: Vec<String>,

    /// Invoice total, when the total line is present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
}
