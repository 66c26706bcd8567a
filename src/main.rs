use clap::Parser;
use miette::Result;
use pxgen::cli::{Cli, Commands};
use pxgen::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => pxgen::cli::build::run(args, &printer)?,
        Commands::List(args) => pxgen::cli::list::run(args, &printer)?,
        Commands::Completions(args) => pxgen::cli::completions::run(args)?,
    }

    Ok(())
}
