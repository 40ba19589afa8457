//! Regex patterns for the supported invoice layout dialects.
//!
//! Every pattern captures the field value in group 1. The labeled variants
//! cover the `Invoice Number:` style layout; the framed variants cover the
//! all-caps template where values sit between fixed landmarks.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Invoice number: labeled layout, then bare all-caps header.
    pub static ref NUMBER_LABELED: Regex = Regex::new(r"Invoice Number:(.*)").unwrap();
    pub static ref NUMBER_BARE: Regex = Regex::new(r"INVOICE(.*)").unwrap();

    // Invoice date: labeled layout, then the DATE .. PLEASE framed span.
    pub static ref DATE_LABELED: Regex = Regex::new(r"Invoice Date:(.*)").unwrap();
    pub static ref DATE_FRAMED: Regex = Regex::new(r"(?s)\n\nDATE(.*?)PLEASE").unwrap();

    // Invoice address: shipped-to block, then bill-to block.
    pub static ref ADDRESS_SHIPPED_TO: Regex =
        Regex::new(r"(?s)Shipped To\):(.*?)# Description").unwrap();
    pub static ref ADDRESS_BILL_TO: Regex = Regex::new(r"(?s)BILL TO(.*?)SHIP DATE").unwrap();

    // Subtotal: rest of every line carrying the label.
    pub static ref SUBTOTAL: Regex = Regex::new(r"Subtotal:(.*)").unwrap();
}

/// Literal label marking the invoice total line.
pub const TOTAL_LABEL: &str = "Total Amounts (INR)";
