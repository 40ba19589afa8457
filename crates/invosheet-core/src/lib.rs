//! Core library for scanned-invoice spreadsheet extraction.
//!
//! This crate provides:
//! - PDF page rasterization (embedded scan-image extraction)
//! - Collaborator seams for OCR and table detection
//! - Invoice metadata extraction (number, date, address, subtotal, total)
//! - Record fusion of detected tables with the extracted metadata
//! - The sequential pipeline tying one page image to one output sheet

pub mod error;
pub mod invoice;
pub mod models;
pub mod ocr;
pub mod pdf;
pub mod pipeline;
pub mod table;
pub mod workbook;

pub use error::{
    ExtractionError, InvosheetError, OcrError, PdfError, Result, TableError, WorkbookError,
};
pub use invoice::{normalize_text, MetadataParser};
pub use models::config::{PageErrorPolicy, PipelineConfig};
pub use models::fields::InvoiceFields;
pub use models::table::TableSheet;
pub use ocr::{TesseractOcr, TextOcr};
pub use pdf::{EmbeddedImageRasterizer, PageImage, PageRasterizer};
pub use pipeline::{PageOutcome, Pipeline, RunReport};
pub use table::{fuse_fields, read_table_sheet, CommandTableDetector, TableDetector};
pub use workbook::OutputWorkbook;
