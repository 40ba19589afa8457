//! Invoice address extraction and cleanup.

use std::collections::HashSet;

use crate::error::ExtractionError;

use super::patterns::{ADDRESS_BILL_TO, ADDRESS_SHIPPED_TO};
use super::PatternChain;

/// Extract the shipping/billing address block from normalized text.
///
/// Tries the `Shipped To):` .. `# Description` block first, then the
/// `BILL TO` .. `SHIP DATE` block. The raw block is post-processed with
/// [`dedup_tokens`]: OCR over multi-column shipping labels tends to read the
/// same token twice.
pub fn extract_address(text: &str) -> Result<String, ExtractionError> {
    let block = PatternChain::new(vec![&*ADDRESS_SHIPPED_TO, &*ADDRESS_BILL_TO])
        .first_match(text)
        .ok_or(ExtractionError::MissingField("invoice address"))?;
    Ok(dedup_tokens(&block))
}

/// Collapse repeated tokens in an address block, keeping first-seen order,
/// and join everything with single spaces.
///
/// The result is a single trimmed line; applying the reduction again is a
/// no-op. This is a heuristic cleanup, not guaranteed correctness.
pub fn dedup_tokens(block: &str) -> String {
    let mut seen = HashSet::new();
    let mut address = String::new();

    for token in block.split_whitespace() {
        if seen.insert(token) {
            if !address.is_empty() {
                address.push(' ');
            }
            address.push_str(token);
        }
    }

    address
}
