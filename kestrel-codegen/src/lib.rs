//! Shared naming and type resolution abstractions for Kestrel.
//!
//! This crate provides the language-agnostic seams implemented by each
//! target language backend (e.g., `kestrel-codegen-kotlin`).
//!
//! # Module Organization
//!
//! - [`language`] - Backend traits (TypeMapper, Namer, ImportResolver) and the ReservedWords guard
//! - [`generation`] - Output helpers (ImportCollector)

pub mod generation;
pub mod language;

pub use generation::ImportCollector;
pub use language::{ImportResolver, Namer, ReservedWords, TypeMapper};
