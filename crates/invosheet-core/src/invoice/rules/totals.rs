//! Subtotal and total extraction.

use super::patterns::{SUBTOTAL, TOTAL_LABEL};

/// Extract every subtotal line value, in text order.
///
/// Subtotals are optional on the supported layouts: no occurrence yields an
/// empty list, not an error.
pub fn extract_subtotals(text: &str) -> Vec<String> {
    SUBTOTAL
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// Extract the invoice total from the line carrying the total label.
///
/// The value is the last whitespace-delimited token of the first line
/// containing the label. Absence of such a line is a defined "no value"
/// result, not an error.
pub fn extract_total(text: &str) -> Option<String> {
    text.lines()
        .find(|line| line.contains(TOTAL_LABEL))
        .and_then(|line| line.split_whitespace().next_back())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_last_token_of_label_line() {
        let text = "items...\nTotal Amounts (INR) Due 15000.00\nfooter";
        assert_eq!(extract_total(text), Some("15000.00".to_string()));
    }

    #[test]
    fn total_absent_without_label_line() {
        assert_eq!(extract_total("Grand Total 12.00"), None);
    }

    #[test]
    fn first_label_line_wins_when_repeated() {
        let text = "Total Amounts (INR) 100.00\nTotal Amounts (INR) 200.00";
        assert_eq!(extract_total(text), Some("100.00".to_string()));
    }

    #[test]
    fn subtotals_collect_in_text_order() {
        let text = "Subtotal: 10.00\nline\nSubtotal:  20.50 \n";
        assert_eq!(extract_subtotals(text), vec!["10.00", "20.50"]);
    }

    #[test]
    fn no_subtotal_yields_empty_list() {
        assert!(extract_subtotals("no such label").is_empty());
    }
}
