//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod output;
mod paths;
mod types;

pub use check::CheckReport;
pub use output::{Report, TerminalOutput};
pub use paths::PathsReport;
pub use types::TypeReport;
