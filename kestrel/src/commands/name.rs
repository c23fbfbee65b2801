use clap::Args;
use eyre::Result;
use kestrel_codegen_kotlin::KotlinCodegen;

use super::ConfigArgs;
use crate::ops::{self, NameKind};

#[derive(Args)]
pub struct NameCommand {
    /// Kind of identifier to resolve
    #[arg(value_enum)]
    pub kind: NameKind,

    /// Raw name as written in the API schema
    pub raw: String,

    /// Underlying type of an enum value
    #[arg(long, default_value = "String")]
    pub datatype: String,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl NameCommand {
    pub fn run(&self) -> Result<()> {
        let codegen = KotlinCodegen::new(&self.config.load_or_default());
        println!(
            "{}",
            ops::resolve_name(&codegen, self.kind, &self.raw, &self.datatype)
        );
        Ok(())
    }
}
