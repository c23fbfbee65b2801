//! Kotlin backend for the Kestrel code generator.
//!
//! Turns raw schema names into Kotlin identifiers and schema properties into
//! Kotlin type declarations. Everything hangs off [`KotlinCodegen`], which
//! implements the [`TypeMapper`], [`Namer`] and [`ImportResolver`] seams.
//!
//! ```
//! use kestrel_codegen_kotlin::{KotlinCodegen, Namer, TypeMapper};
//! use kestrel_ir::SchemaProperty;
//!
//! let codegen = KotlinCodegen::default();
//! assert_eq!(codegen.model_name("pet_store"), "PetStore");
//! assert_eq!(codegen.var_name("pet-id"), "petId");
//!
//! let tags = SchemaProperty::array(SchemaProperty::primitive("string"));
//! assert_eq!(codegen.type_declaration(&tags), "Array<String>");
//! ```

mod codegen;
mod identifiers;
mod imports;
mod naming;
mod sanitize;
mod tables;
mod type_mapper;

pub use codegen::{KotlinCodegen, strip_path_separators};
pub use identifiers::{DEFAULT_SERVICE, EMPTY_ENUM_VALUE};
pub use kestrel_codegen::{ImportCollector, ImportResolver, Namer, TypeMapper};
pub use naming::{KOTLIN_RESERVED, unescape};
pub use sanitize::{SpecialCharacterTranscoder, UNDERSCORE_FALLBACK, sanitize_name};
pub use tables::{DEFAULT_INCLUDES, LANGUAGE_PRIMITIVES, TypeMappingTable};
