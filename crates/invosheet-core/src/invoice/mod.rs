//! Invoice metadata extraction from recognized page text.

pub mod normalize;
mod parser;
pub mod rules;

pub use normalize::normalize_text;
pub use parser::MetadataParser;

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
