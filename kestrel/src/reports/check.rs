//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from configuration validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Resolved options, in template order.
    pub options: Vec<(String, String)>,
    /// Number of configured type mappings.
    pub type_mappings: usize,
    /// Number of configured import mappings.
    pub import_mappings: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.section("Options");
        for (key, value) in &self.options {
            out.key_value_indented(key, value);
        }

        if self.type_mappings > 0 || self.import_mappings > 0 {
            out.newline();
            out.section("Mappings");
            out.key_value_indented("type", &self.type_mappings.to_string());
            out.key_value_indented("import", &self.import_mappings.to_string());
        }
    }
}
