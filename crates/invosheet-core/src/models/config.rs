//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the invosheet pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// OCR collaborator configuration.
    pub ocr: OcrConfig,

    /// PDF rasterization configuration.
    pub pdf: PdfConfig,

    /// Table-detection collaborator configuration.
    pub table: TableDetectConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            ocr: OcrConfig::default(),
            pdf: PdfConfig::default(),
            table: TableDetectConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// OCR collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// OCR binary to invoke (default: "tesseract", resolved via PATH).
    pub program: String,

    /// Recognition language passed to the engine.
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            program: "tesseract".to_string(),
            language: "eng".to_string(),
        }
    }
}

/// PDF rasterization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to rasterize per PDF (0 = unlimited).
    pub max_pages: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { max_pages: 0 }
    }
}

/// Table-detection collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableDetectConfig {
    /// External detection program to invoke.
    pub program: String,

    /// Interpret rows that have no visible separators.
    pub implicit_rows: bool,

    /// Tolerate borderless tables.
    pub borderless_tables: bool,

    /// Minimum detection confidence (0-100).
    pub min_confidence: u8,

    /// Sheet the importer reads from the detector's workbook.
    pub sheet_name: String,
}

impl Default for TableDetectConfig {
    fn default() -> Self {
        Self {
            program: "img2table".to_string(),
            implicit_rows: false,
            borderless_tables: true,
            min_confidence: 50,
            sheet_name: "Page 1 - Table 2".to_string(),
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Scope of a page-level failure.
    pub on_page_error: PageErrorPolicy,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            on_page_error: PageErrorPolicy::Skip,
        }
    }
}

/// What to do when processing of one page fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageErrorPolicy {
    /// Log the failure and continue with the next page.
    Skip,

    /// Abort the whole run.
    Abort,
}

impl PipelineConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_supported_detector_settings() {
        let config = PipelineConfig::default();

        assert_eq!(config.ocr.program, "tesseract");
        assert_eq!(config.ocr.language, "eng");
        assert!(!config.table.implicit_rows);
        assert!(config.table.borderless_tables);
        assert_eq!(config.table.min_confidence, 50);
        assert_eq!(config.table.sheet_name, "Page 1 - Table 2");
        assert_eq!(config.extraction.on_page_error, PageErrorPolicy::Skip);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{"extraction": {"on_page_error": "abort"}}"#).unwrap();

        assert_eq!(config.extraction.on_page_error, PageErrorPolicy::Abort);
        assert_eq!(config.ocr.language, "eng");
        assert_eq!(config.table.min_confidence, 50);
    }

    #[test]
    fn round_trips_through_json() {
        let config = PipelineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: PipelineConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.table.sheet_name, config.table.sheet_name);
        assert_eq!(back.extraction.on_page_error, config.extraction.on_page_error);
    }
}
