use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use kestrel_manifest::KestrelToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to kestrel.toml (defaults to ./kestrel.toml)
    #[arg(short, long, default_value = "kestrel.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let kestrel_toml = KestrelToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(kestrel_toml.config(), &self.config);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
