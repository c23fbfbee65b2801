mod check;
mod name;
mod paths;
mod types;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use eyre::Result;
use kestrel_manifest::GeneratorConfig;
use name::NameCommand;
use paths::PathsCommand;
use tracing::debug;
use types::TypeCommand;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for kestrel_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Location of the generator configuration.
#[derive(Args)]
pub struct ConfigArgs {
    /// Path to kestrel.toml (defaults to ./kestrel.toml)
    #[arg(short, long, default_value = "kestrel.toml")]
    pub config: PathBuf,
}

impl ConfigArgs {
    /// Load the configuration, falling back to the defaults when the file
    /// does not exist.
    pub fn load_or_default(&self) -> GeneratorConfig {
        if !self.config.exists() {
            debug!(path = %self.config.display(), "no configuration file, using defaults");
            return GeneratorConfig::default();
        }
        kestrel_manifest::parse_file(&self.config).unwrap_or_exit()
    }
}

#[derive(Parser)]
#[command(name = "kestrel")]
#[command(version)]
#[command(about = "Resolve Kotlin names and types for generated API clients")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Name(cmd) => cmd.run(),
            Commands::Type(cmd) => cmd.run(),
            Commands::Paths(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate kestrel.toml and print the resolved options
    Check(CheckCommand),

    /// Resolve a single identifier
    Name(NameCommand),

    /// Resolve the Kotlin type of a schema property given as JSON
    Type(TypeCommand),

    /// Print the folders generated sources and docs are written to
    Paths(PathsCommand),
}
