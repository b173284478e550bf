use clap::Parser;
use grove::cli::{Cli, Commands};
use grove::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Validate(args) => grove::cli::validate::run(args, &printer)?,
        Commands::Tree(args) => grove::cli::tree::run(args)?,
        Commands::Merge(args) => grove::cli::merge::run(args, &printer)?,
        Commands::Stats(args) => grove::cli::stats::run(args, &printer)?,
        Commands::Completions(args) => grove::cli::completions::run(args)?,
    }

    Ok(())
}
