use indexmap::IndexMap;
use serde::Deserialize;

/// Raw generator options as written in `kestrel.toml`.
///
/// Every field is optional; [`crate::GeneratorConfig`] fills in the defaults
/// and validates the naming convention.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Root of the generated project
    pub output_folder: Option<String>,

    /// Source root inside the generated project
    pub source_folder: Option<String>,

    /// Base package; seeds the model and api packages when they are not set
    pub package_name: Option<String>,

    /// Package of generated models
    pub model_package: Option<String>,

    /// Package of generated service interfaces
    pub api_package: Option<String>,

    /// Artifact organization (maven groupId)
    pub group_id: Option<String>,

    /// Artifact name
    pub artifact_id: Option<String>,

    /// Artifact version
    pub artifact_version: Option<String>,

    /// Casing of enum constants, one of the naming convention values
    pub enum_property_naming: Option<String>,

    /// Accepted for compatibility, ignored in favor of `packageName`
    pub invoker_package: Option<String>,

    /// Extra or overriding schema type mappings
    #[serde(default)]
    pub type_mappings: IndexMap<String, String>,

    /// Extra or overriding import mappings
    #[serde(default)]
    pub import_mappings: IndexMap<String, String>,
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    pub fn with_enum_property_naming(mut self, naming: impl Into<String>) -> Self {
        self.enum_property_naming = Some(naming.into());
        self
    }

    pub fn with_output_folder(mut self, output_folder: impl Into<String>) -> Self {
        self.output_folder = Some(output_folder.into());
        self
    }

    pub fn with_type_mapping(
        mut self,
        schema_type: impl Into<String>,
        target_type: impl Into<String>,
    ) -> Self {
        self.type_mappings
            .insert(schema_type.into(), target_type.into());
        self
    }

    pub fn with_import_mapping(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.import_mappings.insert(name.into(), path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_keys() {
        let options: GeneratorOptions = toml::from_str(
            r#"
            sourceFolder = "src/main/kt"
            packageName = "com.example"
            enumPropertyNaming = "snake_case"

            [typeMappings]
            DateTime = "java.time.OffsetDateTime"
            "#,
        )
        .unwrap();

        assert_eq!(options.source_folder.as_deref(), Some("src/main/kt"));
        assert_eq!(options.package_name.as_deref(), Some("com.example"));
        assert_eq!(options.enum_property_naming.as_deref(), Some("snake_case"));
        assert_eq!(
            options.type_mappings.get("DateTime").map(String::as_str),
            Some("java.time.OffsetDateTime")
        );
        assert!(options.import_mappings.is_empty());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let result = toml::from_str::<GeneratorOptions>("sourceFolderr = \"src\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_builder() {
        let options = GeneratorOptions::new()
            .with_package_name("com.example")
            .with_enum_property_naming("UPPERCASE")
            .with_type_mapping("uuid", "UUID")
            .with_import_mapping("Money", "org.joda.money.Money");

        assert_eq!(options.package_name.as_deref(), Some("com.example"));
        assert_eq!(options.enum_property_naming.as_deref(), Some("UPPERCASE"));
        assert_eq!(options.type_mappings.len(), 1);
        assert_eq!(options.import_mappings.len(), 1);
    }
}
