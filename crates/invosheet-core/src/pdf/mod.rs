//! PDF page rasterization.

mod rasterizer;

pub use rasterizer::EmbeddedImageRasterizer;

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::error::PdfError;

/// Result type for rasterization operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// One rasterized page from a source PDF.
#[derive(Debug, Clone)]
pub struct PageImage {
    /// Source PDF path.
    pub source: PathBuf,

    /// 1-based page number within the source.
    pub page: u32,

    /// Decoded page image.
    pub image: DynamicImage,
}

/// Turns a PDF file into one image per page.
pub trait PageRasterizer {
    /// Produce the ordered page images of `pdf`.
    fn rasterize(&self, pdf: &Path) -> Result<Vec<PageImage>>;
}
