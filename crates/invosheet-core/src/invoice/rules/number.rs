//! Invoice number extraction.

use crate::error::ExtractionError;

use super::patterns::{NUMBER_BARE, NUMBER_LABELED};
use super::PatternChain;

/// Extract the invoice number from normalized text.
///
/// Tries the labeled `Invoice Number:` layout first, then the all-caps
/// `INVOICE` header layout. The pattern list is exhaustive for the supported
/// layouts, so no match is an error rather than an empty value.
pub fn extract_number(text: &str) -> Result<String, ExtractionError> {
    PatternChain::new(vec![&*NUMBER_LABELED, &*NUMBER_BARE])
        .first_match(text)
        .ok_or(ExtractionError::MissingField("invoice number"))
}
