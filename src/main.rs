use clap::Parser;
use miette::Result;
use shotkit::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Frame(args) => shotkit::cli::frame::run(args)?,
        Commands::Marketing(args) => shotkit::cli::marketing::run(args)?,
        Commands::Completions(args) => shotkit::cli::completions::run(args)?,
    }

    Ok(())
}
