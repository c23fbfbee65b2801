//! Import requirements of resolved Kotlin types.

use kestrel_codegen::{ImportCollector, ImportResolver, TypeMapper};
use kestrel_ir::SchemaProperty;

use crate::{KotlinCodegen, tables::TypeMappingTable};

impl ImportResolver for KotlinCodegen {
    fn needs_import(&self, type_name: &str) -> bool {
        !(TypeMappingTable::has_builtin_prefix(type_name)
            || TypeMappingTable::is_default_include(type_name)
            || TypeMappingTable::is_primitive(type_name))
    }

    fn model_import(&self, name: &str) -> String {
        if !self.needs_import(name) {
            return name.to_string();
        }
        if let Some(path) = self.tables.import_path(name) {
            return path.to_string();
        }
        // Already qualified through a custom import mapping.
        if name.contains('.') {
            return name.to_string();
        }

        match self.config().model_package() {
            "" => name.to_string(),
            package => format!("{}.{}", package, name),
        }
    }
}

impl KotlinCodegen {
    /// Gather the imports needed to declare `properties`.
    ///
    /// Containers are walked down to their leaf types; only leaves that
    /// resolve to a type needing an import are recorded.
    pub fn collect_imports<'a>(
        &self,
        properties: impl IntoIterator<Item = &'a SchemaProperty>,
    ) -> ImportCollector {
        let mut imports = ImportCollector::new();
        for property in properties {
            self.collect_property_imports(property, &mut imports);
        }
        imports
    }

    fn collect_property_imports(&self, property: &SchemaProperty, imports: &mut ImportCollector) {
        match property {
            SchemaProperty::Array { items } => self.collect_property_imports(items, imports),
            SchemaProperty::Map { values } => self.collect_property_imports(values, imports),
            leaf => {
                let declaration = self.type_declaration(leaf);
                if self.needs_import(&declaration) {
                    imports.add_path(&self.model_import(&declaration));
                }
            }
        }
    }
}
