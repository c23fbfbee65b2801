use indexmap::IndexMap;
use kestrel_core::NamingConvention;
use tracing::{debug, warn};

use crate::{GeneratorOptions, Result, SourceContext};

pub const DEFAULT_OUTPUT_FOLDER: &str = "generated-code/kotlin";
pub const DEFAULT_SOURCE_FOLDER: &str = "src/main/kotlin";
pub const DEFAULT_PACKAGE_NAME: &str = "io.swagger.client";
pub const DEFAULT_GROUP_ID: &str = "io.swagger";
pub const DEFAULT_ARTIFACT_ID: &str = "kotlin-client";
pub const DEFAULT_ARTIFACT_VERSION: &str = "1.0.0";
pub const DEFAULT_DOC_PATH: &str = "docs/";

/// Fully resolved, immutable generator configuration.
///
/// Built once from [`GeneratorOptions`] before any name is resolved and then
/// shared read-only by every resolution call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    output_folder: String,
    source_folder: String,
    package_name: String,
    model_package: String,
    api_package: String,
    group_id: String,
    artifact_id: String,
    artifact_version: String,
    api_doc_path: String,
    model_doc_path: String,
    enum_property_naming: NamingConvention,
    type_mappings: IndexMap<String, String>,
    import_mappings: IndexMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::build(GeneratorOptions::default(), NamingConvention::default())
    }
}

impl GeneratorConfig {
    /// Resolve options that were built in code.
    pub fn new(options: GeneratorOptions) -> Result<Self> {
        Self::from_options(options, &SourceContext::detached())
    }

    /// Resolve options read from `ctx`, reporting errors against its source.
    pub fn from_options(options: GeneratorOptions, ctx: &SourceContext) -> Result<Self> {
        let enum_property_naming = match options.enum_property_naming.as_deref() {
            Some(value) => value
                .parse::<NamingConvention>()
                .map_err(|err| ctx.invalid_naming_convention(err.value))?,
            None => NamingConvention::default(),
        };

        if options.invoker_package.is_some() {
            warn!("invokerPackage is ignored by the kotlin generator, use packageName");
        }

        let config = Self::build(options, enum_property_naming);
        debug!(
            package = %config.package_name,
            model_package = %config.model_package,
            api_package = %config.api_package,
            enum_property_naming = %config.enum_property_naming,
            "resolved generator configuration"
        );
        Ok(config)
    }

    fn build(options: GeneratorOptions, enum_property_naming: NamingConvention) -> Self {
        let package_name = options
            .package_name
            .unwrap_or_else(|| DEFAULT_PACKAGE_NAME.to_string());
        let model_package = options
            .model_package
            .unwrap_or_else(|| format!("{}.models", package_name));
        let api_package = options
            .api_package
            .unwrap_or_else(|| format!("{}.apis", package_name));

        Self {
            output_folder: options
                .output_folder
                .unwrap_or_else(|| DEFAULT_OUTPUT_FOLDER.to_string()),
            source_folder: options
                .source_folder
                .unwrap_or_else(|| DEFAULT_SOURCE_FOLDER.to_string()),
            package_name,
            model_package,
            api_package,
            group_id: options
                .group_id
                .unwrap_or_else(|| DEFAULT_GROUP_ID.to_string()),
            artifact_id: options
                .artifact_id
                .unwrap_or_else(|| DEFAULT_ARTIFACT_ID.to_string()),
            artifact_version: options
                .artifact_version
                .unwrap_or_else(|| DEFAULT_ARTIFACT_VERSION.to_string()),
            api_doc_path: DEFAULT_DOC_PATH.to_string(),
            model_doc_path: DEFAULT_DOC_PATH.to_string(),
            enum_property_naming,
            type_mappings: options.type_mappings,
            import_mappings: options.import_mappings,
        }
    }

    pub fn output_folder(&self) -> &str {
        &self.output_folder
    }

    pub fn source_folder(&self) -> &str {
        &self.source_folder
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn model_package(&self) -> &str {
        &self.model_package
    }

    pub fn api_package(&self) -> &str {
        &self.api_package
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn artifact_version(&self) -> &str {
        &self.artifact_version
    }

    pub fn api_doc_path(&self) -> &str {
        &self.api_doc_path
    }

    pub fn model_doc_path(&self) -> &str {
        &self.model_doc_path
    }

    pub fn enum_property_naming(&self) -> NamingConvention {
        self.enum_property_naming
    }

    /// Type mappings that extend or override the backend defaults.
    pub fn type_mappings(&self) -> &IndexMap<String, String> {
        &self.type_mappings
    }

    /// Import mappings that extend or override the backend defaults.
    pub fn import_mappings(&self) -> &IndexMap<String, String> {
        &self.import_mappings
    }

    /// Values exposed to the template layer, in a stable order.
    pub fn template_properties(&self) -> IndexMap<&'static str, String> {
        IndexMap::from([
            ("sourceFolder", self.source_folder.clone()),
            ("packageName", self.package_name.clone()),
            ("artifactId", self.artifact_id.clone()),
            ("groupId", self.group_id.clone()),
            ("artifactVersion", self.artifact_version.clone()),
            ("apiPackage", self.api_package.clone()),
            ("modelPackage", self.model_package.clone()),
            ("apiDocPath", self.api_doc_path.clone()),
            ("modelDocPath", self.model_doc_path.clone()),
            (
                "enumPropertyNaming",
                self.enum_property_naming.as_str().to_string(),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.source_folder(), "src/main/kotlin");
        assert_eq!(config.package_name(), "io.swagger.client");
        assert_eq!(config.model_package(), "io.swagger.client.models");
        assert_eq!(config.api_package(), "io.swagger.client.apis");
        assert_eq!(config.artifact_version(), "1.0.0");
        assert_eq!(config.enum_property_naming(), NamingConvention::Original);
    }

    #[test]
    fn test_package_name_seeds_sub_packages() {
        let config =
            GeneratorConfig::new(GeneratorOptions::new().with_package_name("com.example")).unwrap();
        assert_eq!(config.model_package(), "com.example.models");
        assert_eq!(config.api_package(), "com.example.apis");
    }

    #[test]
    fn test_explicit_sub_packages_win() {
        let options = GeneratorOptions {
            package_name: Some("com.example".to_string()),
            model_package: Some("com.example.dto".to_string()),
            ..Default::default()
        };
        let config = GeneratorConfig::new(options).unwrap();
        assert_eq!(config.model_package(), "com.example.dto");
        assert_eq!(config.api_package(), "com.example.apis");
    }

    #[test]
    fn test_metadata_passes_through_verbatim() {
        let options = GeneratorOptions {
            group_id: Some("Org.Example ".to_string()),
            artifact_id: Some("pet store".to_string()),
            artifact_version: Some("2.0.0-SNAPSHOT".to_string()),
            ..Default::default()
        };
        let config = GeneratorConfig::new(options).unwrap();
        assert_eq!(config.group_id(), "Org.Example ");
        assert_eq!(config.artifact_id(), "pet store");
        assert_eq!(config.artifact_version(), "2.0.0-SNAPSHOT");
    }

    #[test]
    fn test_enum_property_naming() {
        let config =
            GeneratorConfig::new(GeneratorOptions::new().with_enum_property_naming("camelCase"))
                .unwrap();
        assert_eq!(config.enum_property_naming(), NamingConvention::CamelCase);
    }

    #[test]
    fn test_invalid_enum_property_naming() {
        let err =
            GeneratorConfig::new(GeneratorOptions::new().with_enum_property_naming("kebab-case"))
                .unwrap_err();
        match *err {
            Error::InvalidNamingConvention { value, valid, .. } => {
                assert_eq!(value, "kebab-case");
                assert_eq!(valid, "original, camelCase, PascalCase, snake_case, UPPERCASE");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invoker_package_is_ignored() {
        let options = GeneratorOptions {
            invoker_package: Some("com.legacy".to_string()),
            ..Default::default()
        };
        let config = GeneratorConfig::new(options).unwrap();
        assert_eq!(config.package_name(), "io.swagger.client");
    }

    #[test]
    fn test_template_properties_order() {
        let config = GeneratorConfig::default();
        let keys: Vec<_> = config.template_properties().keys().copied().collect();
        assert_eq!(
            keys,
            [
                "sourceFolder",
                "packageName",
                "artifactId",
                "groupId",
                "artifactVersion",
                "apiPackage",
                "modelPackage",
                "apiDocPath",
                "modelDocPath",
                "enumPropertyNaming",
            ]
        );
    }
}
