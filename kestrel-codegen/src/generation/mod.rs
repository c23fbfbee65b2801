//! Output helpers shared by backends.

mod imports;

pub use imports::ImportCollector;
