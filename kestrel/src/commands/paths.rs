use clap::Args;
use eyre::Result;
use kestrel_codegen_kotlin::KotlinCodegen;

use super::ConfigArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PathsCommand {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl PathsCommand {
    pub fn run(&self) -> Result<()> {
        let codegen = KotlinCodegen::new(&self.config.load_or_default());

        let report = ops::paths(&codegen);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
