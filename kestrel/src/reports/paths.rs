//! Paths command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Folders generated files are written to.
#[derive(Debug)]
pub struct PathsReport {
    pub api: PathBuf,
    pub model: PathBuf,
    pub api_docs: PathBuf,
    pub model_docs: PathBuf,
}

impl Report for PathsReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("apis", &self.api.display().to_string());
        out.key_value("models", &self.model.display().to_string());
        out.key_value("api docs", &self.api_docs.display().to_string());
        out.key_value("model docs", &self.model_docs.display().to_string());
    }
}
