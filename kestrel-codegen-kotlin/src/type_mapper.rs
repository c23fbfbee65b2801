//! Schema type to Kotlin type mapping.

use kestrel_codegen::{Namer, TypeMapper};
use kestrel_ir::SchemaProperty;

use crate::KotlinCodegen;

/// Factory used to instantiate map defaults.
const MAP_INSTANTIATION: &str = "mapOf";

impl TypeMapper for KotlinCodegen {
    fn language(&self) -> &'static str {
        "kotlin"
    }

    fn resolve_type(&self, schema_type: &str) -> String {
        let mapped = self.tables.mapped_type(schema_type).unwrap_or(schema_type);
        self.model_name(mapped)
    }

    fn type_declaration(&self, property: &SchemaProperty) -> String {
        match property {
            SchemaProperty::Primitive { schema_type } => self.resolve_type(schema_type),
            SchemaProperty::Array { items } => {
                format!("{}<{}>", self.tables.array_type(), self.type_declaration(items))
            }
            SchemaProperty::Map { values } => format!(
                "{}<String, {}>",
                self.resolve_type("map"),
                self.type_declaration(values)
            ),
            SchemaProperty::Reference { .. } => {
                self.model_name(property.simple_ref().unwrap_or_default())
            }
        }
    }

    fn instantiation_type(&self, property: &SchemaProperty) -> Option<String> {
        match property {
            SchemaProperty::Array { .. } => Some(self.type_declaration(property)),
            SchemaProperty::Map { values } => Some(format!(
                "{}<String, {}>",
                MAP_INSTANTIATION,
                self.resolve_type(values.schema_type())
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use kestrel_manifest::{GeneratorConfig, GeneratorOptions};

    use super::*;

    fn primitive(schema_type: &str) -> SchemaProperty {
        SchemaProperty::primitive(schema_type)
    }

    #[test]
    fn test_language() {
        assert_eq!(KotlinCodegen::default().language(), "kotlin");
    }

    #[test]
    fn test_resolve_primitive_keywords() {
        let codegen = KotlinCodegen::default();
        assert_eq!(codegen.resolve_type("string"), "String");
        assert_eq!(codegen.resolve_type("integer"), "Int");
        assert_eq!(codegen.resolve_type("long"), "Long");
        assert_eq!(codegen.resolve_type("number"), "Double");
        assert_eq!(codegen.resolve_type("boolean"), "Boolean");
        // Free-form objects map to Kotlin's Any, not to a generated Empty model.
        assert_eq!(codegen.resolve_type("object"), "Any");
        assert_ne!(codegen.resolve_type("object"), "Empty");
        assert_eq!(codegen.resolve_type("binary"), "ByteArray");
    }

    #[test]
    fn test_resolve_through_import_mapping() {
        let codegen = KotlinCodegen::default();
        assert_eq!(codegen.resolve_type("date-time"), "java.util.Calendar");
        assert_eq!(codegen.resolve_type("date"), "java.util.Calendar");
        assert_eq!(codegen.resolve_type("file"), "java.io.File");
        assert_eq!(codegen.resolve_type("UUID"), "java.util.UUID");
        assert_eq!(codegen.resolve_type("BigDecimal"), "Double");
    }

    #[test]
    fn test_resolve_unknown_as_model() {
        let codegen = KotlinCodegen::default();
        assert_eq!(codegen.resolve_type("pet"), "Pet");
        assert_eq!(codegen.resolve_type("order_item"), "OrderItem");
        assert_eq!(codegen.resolve_type("class"), "`Class`");
    }

    #[test]
    fn test_nested_array_declaration() {
        let codegen = KotlinCodegen::default();
        let property = SchemaProperty::array(SchemaProperty::array(primitive("integer")));
        assert_eq!(codegen.type_declaration(&property), "Array<Array<Int>>");
    }

    #[test]
    fn test_map_declaration() {
        let codegen = KotlinCodegen::default();
        let property = SchemaProperty::map(primitive("string"));
        assert_eq!(codegen.type_declaration(&property), "Map<String, String>");

        let property = SchemaProperty::map(SchemaProperty::array(SchemaProperty::reference(
            "#/definitions/Pet",
        )));
        assert_eq!(codegen.type_declaration(&property), "Map<String, Array<Pet>>");
    }

    #[test]
    fn test_reference_declaration() {
        let codegen = KotlinCodegen::default();
        assert_eq!(
            codegen.type_declaration(&SchemaProperty::reference("#/definitions/pet_store")),
            "PetStore"
        );
        assert_eq!(
            codegen.type_declaration(&SchemaProperty::reference("UUID")),
            "java.util.UUID"
        );
    }

    #[test]
    fn test_array_type_override() {
        let options = GeneratorOptions::new().with_type_mapping("array", "List");
        let codegen = KotlinCodegen::new(&GeneratorConfig::new(options).unwrap());
        let property = SchemaProperty::array(primitive("string"));
        assert_eq!(codegen.type_declaration(&property), "List<String>");
    }

    #[test]
    fn test_instantiation_type() {
        let codegen = KotlinCodegen::default();
        assert_eq!(
            codegen.instantiation_type(&SchemaProperty::array(primitive("long"))),
            Some("Array<Long>".to_string())
        );
        assert_eq!(
            codegen.instantiation_type(&SchemaProperty::map(primitive("integer"))),
            Some("mapOf<String, Int>".to_string())
        );
        assert_eq!(
            codegen.instantiation_type(&SchemaProperty::map(SchemaProperty::reference("Pet"))),
            Some("mapOf<String, Pet>".to_string())
        );
        assert_eq!(codegen.instantiation_type(&primitive("string")), None);
        assert_eq!(
            codegen.instantiation_type(&SchemaProperty::reference("Pet")),
            None
        );
    }
}
