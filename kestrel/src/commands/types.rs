use clap::Args;
use eyre::{Context, Result};
use kestrel_codegen_kotlin::KotlinCodegen;
use kestrel_ir::SchemaProperty;

use super::ConfigArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TypeCommand {
    /// Schema property as JSON, e.g. '{"kind":"array","items":{"kind":"primitive","type":"integer"}}'
    pub property: String,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl TypeCommand {
    pub fn run(&self) -> Result<()> {
        let property: SchemaProperty =
            serde_json::from_str(&self.property).wrap_err("Invalid schema property")?;
        let codegen = KotlinCodegen::new(&self.config.load_or_default());

        let report = ops::resolve_type(&codegen, &property);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
