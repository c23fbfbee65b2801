//! Schema descriptor types for the Kestrel code generator.
//!
//! These are the shapes handed over by the schema-processing layer. The
//! naming and type resolution backends only read them.
//!
//! # Architecture
//!
//! ```text
//! API schema → (external parser) → kestrel-ir (descriptors) → codegen backend
//! ```

mod operation;
mod property;

pub use operation::SchemaOperation;
pub use property::SchemaProperty;
