use std::path::{Path, PathBuf};

use crate::{Error, GeneratorConfig, GeneratorOptions, Result, SourceContext};

/// Represents a kestrel.toml file with both raw content and resolved configuration.
#[derive(Debug)]
pub struct KestrelToml {
    path: PathBuf,
    content: String,
    config: GeneratorConfig,
}

impl KestrelToml {
    /// Open and resolve a kestrel.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = parse_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the resolved configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

/// Parse a kestrel.toml from a string (uses "kestrel.toml" as default filename)
pub fn parse_str(content: &str) -> Result<GeneratorConfig> {
    parse_str_with_filename(content, "kestrel.toml")
}

/// Parse a kestrel.toml from a string with a custom filename for error reporting
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<GeneratorConfig> {
    let ctx = SourceContext::new(content, filename);
    let options: GeneratorOptions = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    GeneratorConfig::from_options(options, &ctx)
}
