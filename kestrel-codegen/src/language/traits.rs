//! Language-agnostic resolution traits.
//!
//! Every method is a pure function of its arguments and the backend's
//! immutable configuration, so one backend value may serve many threads.

use kestrel_ir::SchemaProperty;

/// Trait for mapping schema types to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a schema type keyword to a language type.
    ///
    /// Unknown keywords are treated as model names.
    fn resolve_type(&self, schema_type: &str) -> String;

    /// Full type declaration of a property, including generic arguments.
    fn type_declaration(&self, property: &SchemaProperty) -> String;

    /// Type used when a default value has to be instantiated, if any.
    fn instantiation_type(&self, _property: &SchemaProperty) -> Option<String> {
        None
    }
}

/// Trait for turning raw schema names into identifiers.
pub trait Namer {
    /// Name of a property or local variable
    fn var_name(&self, name: &str) -> String;

    /// Name of an operation parameter
    fn param_name(&self, name: &str) -> String {
        self.var_name(name)
    }

    /// Name of an enum constant for `value`, whose underlying type is `datatype`
    fn enum_var_name(&self, value: &str, datatype: &str) -> String;

    /// Name of the enum type generated for a property
    fn enum_name(&self, property_name: &str) -> String;

    /// Name of a model type
    fn model_name(&self, name: &str) -> String;

    /// File name (without extension) of a model
    fn model_filename(&self, name: &str) -> String;

    /// Name of the service generated for an operation tag
    fn api_name(&self, tag: &str) -> String;

    /// File name (without extension) of a service
    fn api_filename(&self, tag: &str) -> String {
        self.api_name(tag)
    }
}

/// Trait for deciding whether a resolved type needs an explicit import.
pub trait ImportResolver {
    /// Returns true if `type_name` must be imported to be used.
    fn needs_import(&self, type_name: &str) -> bool;

    /// Path to import for `name`, or `name` itself when no import is needed.
    fn model_import(&self, name: &str) -> String;
}
