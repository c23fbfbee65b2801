//! Core utilities and types for the Kestrel code generator.
//!
//! This crate provides the casing primitives shared by every language
//! backend and the [`NamingConvention`] policy applied to enum constants.

mod case;
mod convention;

// String utilities
pub use case::{camelize, is_constant_style, starts_with_digit, title_case, underscore};
// Naming policy
pub use convention::{NamingConvention, UnknownConvention};
