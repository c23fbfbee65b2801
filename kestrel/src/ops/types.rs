//! Type operation - schema property resolution.

use kestrel_codegen_kotlin::{KotlinCodegen, TypeMapper};
use kestrel_ir::SchemaProperty;

use crate::reports::TypeReport;

/// Resolve the declaration, instantiation type and imports of a property.
pub fn resolve_type(codegen: &KotlinCodegen, property: &SchemaProperty) -> TypeReport {
    TypeReport {
        declaration: codegen.type_declaration(property),
        instantiation: codegen.instantiation_type(property),
        imports: codegen.collect_imports([property]).paths().collect(),
    }
}
