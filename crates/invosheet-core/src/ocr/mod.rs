//! OCR collaborator seam.

mod tesseract;

pub use tesseract::TesseractOcr;

use std::path::Path;

use crate::error::OcrError;

/// Result type for OCR operations.
pub type Result<T> = std::result::Result<T, OcrError>;

/// Recognizes the full plain text of one page image.
///
/// No positional or structural metadata is consumed downstream; the contract
/// is the text alone.
pub trait TextOcr {
    fn recognize(&self, image: &Path) -> Result<String>;
}
