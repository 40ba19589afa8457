//! Extract command - dump metadata fields from a single image or PDF.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;

use invosheet_core::{
    normalize_text, EmbeddedImageRasterizer, InvoiceFields, MetadataParser, PageRasterizer,
    TesseractOcr, TextOcr,
};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (PDF or image)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let ocr = TesseractOcr::new(&config.ocr);
    let parser = MetadataParser::new();

    let fields = match extension.as_str() {
        "pdf" => extract_from_pdf(&args.input, &ocr, &parser)?,
        "png" | "jpg" | "jpeg" | "tiff" | "tif" | "bmp" => {
            extract_from_image(&args.input, &ocr, &parser)?
        }
        _ => anyhow::bail!("unsupported file format: {}", extension),
    };

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&fields)?,
        OutputFormat::Text => format_text(&fields),
    };

    if let Some(path) = &args.output {
        fs::write(path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn extract_from_image(
    path: &Path,
    ocr: &TesseractOcr,
    parser: &MetadataParser,
) -> anyhow::Result<InvoiceFields> {
    let text = ocr.recognize(path)?;
    let text = normalize_text(&text);
    Ok(parser.parse(&text)?)
}

/// The first page carries the invoice header on the supported layouts.
fn extract_from_pdf(
    path: &Path,
    ocr: &TesseractOcr,
    parser: &MetadataParser,
) -> anyhow::Result<InvoiceFields> {
    let rasterizer = EmbeddedImageRasterizer::new().with_max_pages(1);
    let pages = rasterizer.rasterize(path)?;
    let page = pages
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("no pages in {}", path.display()))?;

    let dir = tempfile::tempdir()?;
    let image_path = dir.path().join("page_1.png");
    page.image
        .save_with_format(&image_path, image::ImageFormat::Png)?;

    extract_from_image(&image_path, ocr, parser)
}

fn format_text(fields: &InvoiceFields) -> String {
    let mut out = String::new();

    out.push_str(&format!("Invoice No.: {}\n", fields.number));
    out.push_str(&format!("Invoice Date: {}\n", fields.date));
    out.push_str(&format!("Invoice Address: {}\n", fields.address));
    if let Some(total) = &fields.total {
        out.push_str(&format!("Invoice Total: {}\n", total));
    }
    if !fields.subtotals.is_empty() {
        out.push_str(&format!(
            "Invoice Subtotal: {}\n",
            fields.subtotals.join(", ")
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> InvoiceFields {
        InvoiceFields {
            number: "INV-1".to_string(),
            date: "2024-01-15".to_string(),
            address: "Acme Corp 5th Ave".to_string(),
            subtotals: Vec::new(),
            total: None,
        }
    }

    #[test]
    fn text_format_omits_absent_fields() {
        let text = format_text(&sample_fields());
        assert!(text.contains("Invoice No.: INV-1"));
        assert!(!text.contains("Invoice Total"));
        assert!(!text.contains("Invoice Subtotal"));
    }

    #[test]
    fn json_format_omits_absent_fields() {
        let json = serde_json::to_string(&sample_fields()).unwrap();
        assert!(json.contains("\"number\":\"INV-1\""));
        assert!(!json.contains("total"));
        assert!(!json.contains("subtotals"));
    }
}
