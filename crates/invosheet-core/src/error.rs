//! Error types for the invosheet-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the invosheet library.
#[derive(Error, Debug)]
pub enum InvosheetError {
    /// PDF rasterization error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// OCR collaborator error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Invoice field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Table detection or import error.
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// Output workbook error.
    #[error("workbook error: {0}")]
    Workbook(#[from] WorkbookError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF page rasterization.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// No scan image could be recovered for a page.
    #[error("no page image found on page {0}")]
    NoPageImage(u32),
}

/// Errors from the OCR collaborator.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The OCR program could not be started.
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },

    /// The OCR program ran but reported failure.
    #[error("{program} failed with exit code {code}: {stderr}")]
    Failed {
        program: String,
        code: i32,
        stderr: String,
    },
}

/// Errors related to invoice field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A required field's pattern list produced no match.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Errors related to table detection and import.
#[derive(Error, Debug)]
pub enum TableError {
    /// The intermediate workbook could not be opened.
    #[error("failed to open {path}: {reason}")]
    Open { path: PathBuf, reason: String },

    /// The expected table sheet is missing from the intermediate workbook.
    #[error("sheet {sheet:?} not found in {path}")]
    MissingSheet { sheet: String, path: PathBuf },

    /// The expected table sheet exists but holds no header row.
    #[error("sheet {sheet:?} in {path} is empty")]
    EmptySheet { sheet: String, path: PathBuf },

    /// The detection program could not be started.
    #[error("failed to launch {program}: {source}")]
    DetectorLaunch {
        program: String,
        source: std::io::Error,
    },

    /// The detection program ran but reported failure.
    #[error("{program} failed with exit code {code}: {stderr}")]
    DetectorFailed {
        program: String,
        code: i32,
        stderr: String,
    },
}

/// Errors related to the output workbook.
#[derive(Error, Debug)]
pub enum WorkbookError {
    /// The underlying xlsx writer rejected the sheet data.
    #[error("failed to write workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for the invosheet library.
pub type Result<T> = std::result::Result<T, InvosheetError>;
