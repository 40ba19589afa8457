//! CLI subcommands.

pub mod extract;
pub mod run;

use std::path::Path;

use invosheet_core::PipelineConfig;

/// Load the pipeline configuration, or defaults when no file is given.
pub fn load_config(path: Option<&str>) -> anyhow::Result<PipelineConfig> {
    match path {
        Some(p) => Ok(PipelineConfig::from_file(Path::new(p))?),
        None => Ok(PipelineConfig::default()),
    }
}
