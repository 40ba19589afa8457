//! Pipeline orchestrator: rasterize, detect, recognize, extract, fuse.
//!
//! Everything is sequential and synchronous: one PDF, then one page, then
//! one detection call, one OCR call, field extraction and fusion, before the
//! next page is touched. The only state carried across iterations is the
//! in-memory output workbook, written once at the end of the run.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::Result;
use crate::invoice::{normalize_text, MetadataParser};
use crate::models::config::{PageErrorPolicy, PipelineConfig};
use crate::models::table::TableSheet;
use crate::ocr::{TesseractOcr, TextOcr};
use crate::pdf::{EmbeddedImageRasterizer, PageRasterizer};
use crate::table::{fuse_fields, read_table_sheet, CommandTableDetector, TableDetector};
use crate::workbook::OutputWorkbook;

/// Outcome of one processed page image, for run reporting.
#[derive(Debug, Clone)]
pub struct PageOutcome {
    /// Saved page-image path.
    pub image: PathBuf,

    /// Output sheet written for this image, when processing succeeded.
    pub sheet: Option<String>,

    /// Failure description, when it did not.
    pub error: Option<String>,
}

/// Report for a whole pipeline run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub outcomes: Vec<PageOutcome>,
}

impl RunReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.sheet.is_some()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.error.is_some()).count()
    }
}

/// Sequences the full conversion of source PDFs into the output workbook.
pub struct Pipeline {
    config: PipelineConfig,
    rasterizer: Box<dyn PageRasterizer>,
    ocr: Box<dyn TextOcr>,
    detector: Box<dyn TableDetector>,
    parser: MetadataParser,
}

impl Pipeline {
    /// Pipeline with the default collaborators from the configuration.
    pub fn new(config: PipelineConfig) -> Self {
        let rasterizer = EmbeddedImageRasterizer::new().with_max_pages(config.pdf.max_pages);
        let ocr = TesseractOcr::new(&config.ocr);
        Self {
            rasterizer: Box::new(rasterizer),
            ocr: Box::new(ocr),
            detector: Box::new(CommandTableDetector),
            parser: MetadataParser::new(),
            config,
        }
    }

    /// Replace the rasterization collaborator.
    pub fn with_rasterizer(mut self, rasterizer: impl PageRasterizer + 'static) -> Self {
        self.rasterizer = Box::new(rasterizer);
        self
    }

    /// Replace the OCR collaborator.
    pub fn with_ocr(mut self, ocr: impl TextOcr + 'static) -> Self {
        self.ocr = Box::new(ocr);
        self
    }

    /// Replace the table-detection collaborator.
    pub fn with_detector(mut self, detector: impl TableDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    /// Process `pdfs` in the given order, writing one sheet per page image
    /// into the workbook at `output`. Work files (page images, intermediate
    /// table workbooks) land in `workdir`.
    ///
    /// Page failures follow `extraction.on_page_error`: either the page is
    /// logged and skipped or the run aborts. A failed page never contributes
    /// a partial sheet.
    pub fn run(&self, pdfs: &[PathBuf], workdir: &Path, output: &Path) -> Result<RunReport> {
        fs::create_dir_all(workdir)?;

        // Pass 1: every PDF page becomes a standalone image file.
        let mut images = Vec::new();
        for pdf in pdfs {
            match self.save_page_images(pdf, workdir) {
                Ok(saved) => images.extend(saved),
                Err(e) => {
                    warn!("{}: rasterization failed: {}", pdf.display(), e);
                    if self.config.extraction.on_page_error == PageErrorPolicy::Abort {
                        return Err(e);
                    }
                }
            }
        }
        info!(
            "rasterized {} page image(s) from {} PDF(s)",
            images.len(),
            pdfs.len()
        );

        // Pass 2: detect, recognize, extract and fuse each image.
        let mut workbook = OutputWorkbook::new();
        let mut report = RunReport::default();
        for (idx, image) in images.iter().enumerate() {
            let sheet_name = OutputWorkbook::sheet_name(idx);
            match self.process_image(image, idx, workdir) {
                Ok(fused) => {
                    info!("{}: fused {} row(s)", image.display(), fused.row_count());
                    workbook.add_sheet(sheet_name.clone(), fused);
                    report.outcomes.push(PageOutcome {
                        image: image.clone(),
                        sheet: Some(sheet_name),
                        error: None,
                    });
                }
                Err(e) => {
                    warn!("{}: page failed: {}", image.display(), e);
                    report.outcomes.push(PageOutcome {
                        image: image.clone(),
                        sheet: None,
                        error: Some(e.to_string()),
                    });
                    if self.config.extraction.on_page_error == PageErrorPolicy::Abort {
                        return Err(e);
                    }
                }
            }
        }

        if workbook.is_empty() {
            warn!(
                "no page produced a fused record; not writing {}",
                output.display()
            );
        } else {
            workbook.save(output)?;
        }

        Ok(report)
    }

    /// Rasterize one PDF and persist each page as a PNG work file.
    fn save_page_images(&self, pdf: &Path, workdir: &Path) -> Result<Vec<PathBuf>> {
        let pages = self.rasterizer.rasterize(pdf)?;
        let stem = pdf.file_stem().and_then(|s| s.to_str()).unwrap_or("page");

        let mut saved = Vec::with_capacity(pages.len());
        for page in &pages {
            let path = workdir.join(format!("{}_page_{}.png", stem, page.page));
            page.image.save_with_format(&path, image::ImageFormat::Png)?;
            saved.push(path);
        }
        Ok(saved)
    }

    /// Full per-image processing: either a complete fused record or an
    /// error, never a partial result.
    fn process_image(&self, image: &Path, idx: usize, workdir: &Path) -> Result<TableSheet> {
        let table_path = workdir.join(format!("img_table_{idx}.xlsx"));
        self.detector
            .detect(image, &table_path, &self.config.table)?;
        let table = read_table_sheet(&table_path, &self.config.table.sheet_name)?;

        let text = self.ocr.recognize(image)?;
        let text = normalize_text(&text);
        let fields = self.parser.parse(&text)?;

        Ok(fuse_fields(table, &fields))
    }
}
