pub mod build;
pub mod completions;
pub mod list;

use clap::{Parser, Subcommand};

/// pxgen - procedural sprite and tile asset generator
#[derive(Parser, Debug)]
#[command(name = "pxgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate all sprite and tile assets
    Build(build::BuildArgs),

    /// List the assets the generator knows how to build
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
