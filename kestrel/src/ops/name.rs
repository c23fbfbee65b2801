//! Name operation - single identifier resolution.

use clap::ValueEnum;
use kestrel_codegen_kotlin::{KotlinCodegen, Namer};

/// Kinds of identifiers the backend can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NameKind {
    /// Property or local variable
    Var,
    /// Operation parameter
    Param,
    /// Enum constant
    Enum,
    /// Model type
    Model,
    /// Model file name
    File,
    /// Service interface
    Api,
}

/// Resolve `raw` as an identifier of the given kind.
///
/// `datatype` is only used for enum constants.
pub fn resolve_name(codegen: &KotlinCodegen, kind: NameKind, raw: &str, datatype: &str) -> String {
    match kind {
        NameKind::Var => codegen.var_name(raw),
        NameKind::Param => codegen.param_name(raw),
        NameKind::Enum => codegen.enum_var_name(raw, datatype),
        NameKind::Model => codegen.model_name(raw),
        NameKind::File => codegen.model_filename(raw),
        NameKind::Api => codegen.api_name(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_each_kind() {
        let codegen = KotlinCodegen::default();
        let resolve = |kind, raw| resolve_name(&codegen, kind, raw, "String");

        assert_eq!(resolve(NameKind::Var, "pet-id"), "petId");
        assert_eq!(resolve(NameKind::Param, "class"), "`class`");
        assert_eq!(resolve(NameKind::Enum, ""), "EMPTY");
        assert_eq!(resolve(NameKind::Model, "pet_store"), "PetStore");
        assert_eq!(resolve(NameKind::File, "pet-store"), "PetStore");
        assert_eq!(resolve(NameKind::Api, ""), "DefaultService");
    }
}
