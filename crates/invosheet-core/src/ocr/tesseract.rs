//! Tesseract CLI driver.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use super::{Result, TextOcr};
use crate::error::OcrError;
use crate::models::config::OcrConfig;

/// Runs the `tesseract` binary on an image and captures its stdout.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    program: String,
    language: String,
}

impl TesseractOcr {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            program: config.program.clone(),
            language: config.language.clone(),
        }
    }

    /// Probe for the binary, for early failure before a long run.
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl TextOcr for TesseractOcr {
    fn recognize(&self, image: &Path) -> Result<String> {
        // tesseract <image> stdout -l <lang>
        let output = Command::new(&self.program)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .map_err(|source| OcrError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(OcrError::Failed {
                program: self.program.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("recognized {} chars from {}", text.len(), image.display());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bogus() -> TesseractOcr {
        TesseractOcr::new(&OcrConfig {
            program: "/nonexistent/tesseract".to_string(),
            language: "eng".to_string(),
        })
    }

    #[test]
    fn missing_binary_is_not_available() {
        assert!(!bogus().is_available());
    }

    #[test]
    fn missing_binary_is_a_launch_error() {
        let err = bogus().recognize(Path::new("page.png")).unwrap_err();
        assert!(matches!(err, OcrError::Launch { .. }));
    }
}
