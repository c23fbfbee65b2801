//! Check operation - configuration validation.

use std::path::Path;

use kestrel_manifest::GeneratorConfig;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// The configuration has already been validated while loading; this only
/// collects what the template layer will see.
pub fn check(config: &GeneratorConfig, config_path: &Path) -> CheckReport {
    CheckReport {
        config_path: config_path.to_path_buf(),
        options: config
            .template_properties()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect(),
        type_mappings: config.type_mappings().len(),
        import_mappings: config.import_mappings().len(),
    }
}
