//! OCR text normalization.

/// Rejoin words split across a line wrap with a trailing hyphen.
///
/// `"word-\nbreak"` becomes `"wordbreak"`; Windows line endings are handled
/// the same way. Everything else passes through unchanged.
pub fn normalize_text(text: &str) -> String {
    text.replace("-\r\n", "").replace("-\n", "")
}
