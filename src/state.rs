use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::PipelineOptions;
use crate::pipeline::{analyze, Analysis};
use crate::render::png::{save_png, DEFAULT_HEIGHT, DEFAULT_WIDTH};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The viewer state, independent of rendering.
pub struct AppState {
    /// File the current figure was built from.
    pub source: PathBuf,

    /// Options every (re)load goes through.
    pub options: PipelineOptions,

    pub analysis: Analysis,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(source: PathBuf, options: PipelineOptions, analysis: Analysis) -> Self {
        Self {
            source,
            options,
            analysis,
            status_message: None,
        }
    }

    /// Rebuild the figure from another input file. On failure the current
    /// figure stays and the error is shown in the status line.
    pub fn reload(&mut self, path: &Path) {
        match analyze(path, &self.options) {
            Ok(analysis) => {
                log::info!("Loaded {}", path.display());
                self.source = path.to_path_buf();
                self.analysis = analysis;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Write the current figure as PNG.
    pub fn export_png(&mut self, path: &Path) {
        match self.try_export(path) {
            Ok(()) => self.status_message = Some(format!("Saved {}", path.display())),
            Err(e) => {
                log::error!("Failed to export chart: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    fn try_export(&self, path: &Path) -> Result<()> {
        save_png(&self.analysis.figure, path, DEFAULT_WIDTH, DEFAULT_HEIGHT)?;
        Ok(())
    }
}
