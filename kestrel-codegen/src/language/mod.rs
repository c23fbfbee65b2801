//! Language-specific abstractions.
//!
//! This module provides traits and types for language backends:
//! - [`TypeMapper`] - Trait for mapping schema types to language types
//! - [`Namer`] - Trait for deriving identifiers from raw schema names
//! - [`ImportResolver`] - Trait for deciding which types need an import
//! - [`ReservedWords`] - Language reserved words and their escape syntax

mod reserved;
mod traits;

pub use reserved::ReservedWords;
pub use traits::{ImportResolver, Namer, TypeMapper};
