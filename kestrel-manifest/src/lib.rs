//! `kestrel.toml` parsing and generator configuration.
//!
//! Options are read once, validated, and resolved into an immutable
//! [`GeneratorConfig`] that every resolver borrows.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod options;

pub use config::{
    DEFAULT_ARTIFACT_ID, DEFAULT_ARTIFACT_VERSION, DEFAULT_DOC_PATH, DEFAULT_GROUP_ID,
    DEFAULT_OUTPUT_FOLDER, DEFAULT_PACKAGE_NAME, DEFAULT_SOURCE_FOLDER, GeneratorConfig,
};
pub use error::{Error, Result, SourceContext};
pub use file::{KestrelToml, parse_str, parse_str_with_filename};
pub use options::GeneratorOptions;

/// Open and resolve a kestrel.toml file from the given path
pub fn parse_file(path: impl AsRef<std::path::Path>) -> Result<GeneratorConfig> {
    KestrelToml::open(path).map(|file| file.config().clone())
}
