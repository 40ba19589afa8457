//! Run command - batch a set of invoice PDFs into one output workbook.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::ProgressBar;
use tracing::debug;

use invosheet_core::{PageErrorPolicy, Pipeline, RunReport};

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Input directory or glob pattern for invoice PDFs
    #[arg(required = true)]
    input: String,

    /// Output workbook path (default: invoices_<timestamp>.xlsx)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for page images and intermediate table workbooks
    #[arg(short, long, default_value = "work")]
    workdir: PathBuf,

    /// Also write a per-page summary CSV next to the workbook
    #[arg(long)]
    summary: bool,

    /// Abort the whole run on the first page failure
    #[arg(long)]
    fail_fast: bool,
}

pub fn run(args: RunArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = super::load_config(config_path)?;
    if args.fail_fast {
        config.extraction.on_page_error = PageErrorPolicy::Abort;
    }

    let files = collect_pdfs(&args.input)?;
    if files.is_empty() {
        anyhow::bail!("no PDF files found for input: {}", args.input);
    }
    println!("{} Found {} PDF file(s)", style("ℹ").blue(), files.len());

    let output = args.output.clone().unwrap_or_else(default_output_path);

    let pipeline = Pipeline::new(config);
    let pb = ProgressBar::new_spinner();
    pb.set_message("Processing...");
    let report = pipeline.run(&files, &args.workdir, &output)?;
    pb.finish_and_clear();

    println!(
        "{} Processed {} page image(s) in {:?}",
        style("✓").green(),
        report.outcomes.len(),
        start.elapsed()
    );
    println!(
        "   {} succeeded, {} failed",
        style(report.succeeded()).green(),
        style(report.failed()).red()
    );

    if report.succeeded() > 0 {
        println!(
            "{} Workbook written to {}",
            style("✓").green(),
            output.display()
        );
    }

    let failed: Vec<_> = report
        .outcomes
        .iter()
        .filter(|o| o.error.is_some())
        .collect();
    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed pages:").red());
        for outcome in &failed {
            println!(
                "  - {}: {}",
                outcome.image.display(),
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    if args.summary {
        let summary_path = output.with_extension("summary.csv");
        write_summary(&summary_path, &report)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    debug!("total run time: {:?}", start.elapsed());

    Ok(())
}

/// Collect source PDFs: directory listing order for a directory input,
/// glob expansion otherwise. No sorting beyond what the source yields.
fn collect_pdfs(input: &str) -> anyhow::Result<Vec<PathBuf>> {
    let path = Path::new(input);
    if path.is_dir() {
        let mut files = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let p = entry.path();
            let is_pdf = p
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
            if is_pdf {
                files.push(p);
            }
        }
        return Ok(files);
    }

    let files = glob(input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    Ok(files)
}

fn default_output_path() -> PathBuf {
    let now = chrono::Local::now();
    PathBuf::from(format!("invoices_{}.xlsx", now.format("%Y%m%d_%H%M%S")))
}

fn write_summary(path: &Path, report: &RunReport) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["image", "status", "sheet", "error"])?;
    for outcome in &report.outcomes {
        let image = outcome.image.to_string_lossy();
        if let Some(sheet) = &outcome.sheet {
            wtr.write_record([image.as_ref(), "success", sheet, ""])?;
        } else {
            wtr.write_record([
                image.as_ref(),
                "error",
                "",
                outcome.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
