//! Invoice date extraction.

use crate::error::ExtractionError;

use super::patterns::{DATE_FRAMED, DATE_LABELED};
use super::PatternChain;

/// Extract the invoice date from normalized text.
///
/// Tries the labeled `Invoice Date:` layout first, then the span framed by a
/// `DATE` line and the `PLEASE` token of the payment note below it. The date
/// is returned verbatim, not parsed: the supported layouts print it in more
/// than one shape and the value is only carried into a spreadsheet column.
pub fn extract_date(text: &str) -> Result<String, ExtractionError> {
    PatternChain::new(vec![&*DATE_LABELED, &*DATE_FRAMED])
        .first_match(text)
        .ok_or(ExtractionError::MissingField("invoice date"))
}
