//! Table-detection collaborator seam.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::TableError;
use crate::models::config::TableDetectConfig;

/// Detects tables on a page image and writes them to a workbook file.
pub trait TableDetector {
    /// Run detection on `image`, writing the detected table sheets to the
    /// workbook at `dest`. A run that produces no usable sheet surfaces
    /// later, when the importer looks the expected sheet up.
    fn detect(
        &self,
        image: &Path,
        dest: &Path,
        config: &TableDetectConfig,
    ) -> Result<(), TableError>;
}

/// Drives an external table-detection program.
///
/// The program receives the image path, the destination workbook path, and
/// the row-interpretation/borderless/confidence knobs as flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandTableDetector;

impl TableDetector for CommandTableDetector {
    fn detect(
        &self,
        image: &Path,
        dest: &Path,
        config: &TableDetectConfig,
    ) -> Result<(), TableError> {
        let mut cmd = Command::new(&config.program);
        cmd.arg(image).arg(dest);
        if config.implicit_rows {
            cmd.arg("--implicit-rows");
        }
        if config.borderless_tables {
            cmd.arg("--borderless-tables");
        }
        cmd.arg("--min-confidence")
            .arg(config.min_confidence.to_string());

        debug!("running table detector: {:?}", cmd);

        let output = cmd.output().map_err(|source| TableError::DetectorLaunch {
            program: config.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(TableError::DetectorFailed {
                program: config.program.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn missing_program_is_a_launch_error() {
        let config = TableDetectConfig {
            program: "/nonexistent/table-detector".to_string(),
            ..TableDetectConfig::default()
        };

        let err = CommandTableDetector
            .detect(Path::new("in.png"), Path::new("out.xlsx"), &config)
            .unwrap_err();

        assert!(matches!(err, TableError::DetectorLaunch { .. }));
    }
}
