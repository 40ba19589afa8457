//! Rule-based extractors for invoice metadata fields.

pub mod address;
pub mod date;
pub mod number;
pub mod patterns;
pub mod totals;

pub use address::{dedup_tokens, extract_address};
pub use date::extract_date;
pub use number::extract_number;
pub use totals::{extract_subtotals, extract_total};

use regex::Regex;

/// An ordered list of candidate extraction patterns.
///
/// Patterns are tried in priority order; the first one producing at least one
/// match wins and later patterns are never consulted. Each pattern captures
/// the field value in group 1. This encodes the fallback across invoice
/// layout dialects: a labeled layout is preferred, a looser one is only
/// consulted when the label is absent.
pub struct PatternChain {
    patterns: Vec<&'static Regex>,
}

impl PatternChain {
    pub fn new(patterns: Vec<&'static Regex>) -> Self {
        Self { patterns }
    }

    /// First capture of the first matching pattern, trimmed.
    pub fn first_match(&self, text: &str) -> Option<String> {
        self.patterns.iter().find_map(|re| {
            re.captures(text)
                .map(|caps| caps.get(1).map_or("", |m| m.as_str()).trim().to_string())
        })
    }

    /// Every capture of the first matching pattern, trimmed, in text order.
    pub fn all_matches(&self, text: &str) -> Vec<String> {
        self.patterns
            .iter()
            .map(|re| {
                re.captures_iter(text)
                    .map(|caps| caps.get(1).map_or("", |m| m.as_str()).trim().to_string())
                    .collect::<Vec<_>>()
            })
            .find(|matches| !matches.is_empty())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;
    use regex::Regex;

    use super::*;

    lazy_static! {
        static ref FIRST: Regex = Regex::new(r"first:(\S+)").unwrap();
        static ref SECOND: Regex = Regex::new(r"second:(\S+)").unwrap();
    }

    #[test]
    fn earlier_pattern_wins_even_when_both_match() {
        let chain = PatternChain::new(vec![&*FIRST, &*SECOND]);
        assert_eq!(
            chain.first_match("second:b first:a"),
            Some("a".to_string())
        );
    }

    #[test]
    fn falls_back_when_earlier_pattern_misses() {
        let chain = PatternChain::new(vec![&*FIRST, &*SECOND]);
        assert_eq!(chain.first_match("second:b only"), Some("b".to_string()));
        assert_eq!(chain.first_match("neither"), None);
    }

    #[test]
    fn all_matches_collects_only_the_winning_pattern() {
        let chain = PatternChain::new(vec![&*FIRST, &*SECOND]);
        assert_eq!(
            chain.all_matches("first:a second:x first:b"),
            vec!["a".to_string(), "b".to_string()]
        );
        assert!(chain.all_matches("nothing").is_empty());
    }
}
