//! The Kotlin backend.

use std::path::{Path, PathBuf};

use kestrel_codegen::ReservedWords;
use kestrel_core::NamingConvention;
use kestrel_ir::SchemaOperation;
use kestrel_manifest::GeneratorConfig;

use crate::{
    naming::KOTLIN_RESERVED, sanitize::SpecialCharacterTranscoder, tables::TypeMappingTable,
};

/// Kotlin naming and type resolution.
///
/// Holds only immutable configuration, so a single value can be shared by
/// reference across threads resolving different models.
#[derive(Debug, Clone)]
pub struct KotlinCodegen {
    pub(crate) tables: TypeMappingTable,
    pub(crate) transcoder: SpecialCharacterTranscoder,
    pub(crate) reserved: ReservedWords,
    pub(crate) enum_naming: NamingConvention,
    config: GeneratorConfig,
}

impl Default for KotlinCodegen {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

impl KotlinCodegen {
    /// Build the backend from a resolved configuration.
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            tables: TypeMappingTable::new(config.type_mappings(), config.import_mappings()),
            transcoder: SpecialCharacterTranscoder::default(),
            reserved: KOTLIN_RESERVED,
            enum_naming: config.enum_property_naming(),
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Directory of generated service sources.
    pub fn api_file_folder(&self) -> PathBuf {
        self.source_root().join(package_path(self.config.api_package()))
    }

    /// Directory of generated model sources.
    pub fn model_file_folder(&self) -> PathBuf {
        self.source_root().join(package_path(self.config.model_package()))
    }

    /// Directory of generated service documentation.
    pub fn api_doc_file_folder(&self) -> PathBuf {
        Path::new(self.config.output_folder()).join(self.config.api_doc_path())
    }

    /// Directory of generated model documentation.
    pub fn model_doc_file_folder(&self) -> PathBuf {
        Path::new(self.config.output_folder()).join(self.config.model_doc_path())
    }

    fn source_root(&self) -> PathBuf {
        Path::new(self.config.output_folder()).join(self.config.source_folder())
    }

    /// The operation with its path trimmed of one leading and one trailing `/`.
    pub fn normalize_operation(&self, operation: &SchemaOperation) -> SchemaOperation {
        SchemaOperation {
            path: strip_path_separators(&operation.path).to_string(),
            method: operation.method.clone(),
        }
    }

    /// Remove `"` so text can be embedded in a string literal.
    pub fn escape_quotation_mark(&self, input: &str) -> String {
        input.replace('"', "")
    }

    /// Break comment delimiters so text can be embedded in a comment.
    pub fn escape_unsafe_characters(&self, input: &str) -> String {
        input.replace("*/", "*_/").replace("/*", "/_*")
    }
}

/// Strip one leading and one trailing `/` from an operation path.
pub fn strip_path_separators(path: &str) -> &str {
    let path = path.strip_prefix('/').unwrap_or(path);
    path.strip_suffix('/').unwrap_or(path)
}

fn package_path(package: &str) -> PathBuf {
    package.split('.').filter(|part| !part.is_empty()).collect()
}
