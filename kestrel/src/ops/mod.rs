//! Core operations.
//!
//! This module contains the business logic for kestrel commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod name;
pub mod paths;
pub mod types;

pub use check::check;
pub use name::{NameKind, resolve_name};
pub use paths::paths;
pub use types::resolve_type;
