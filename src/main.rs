use clap::Parser;
use miette::Result;
use hub::cli::{Cli, Commands};
use hub::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => hub::cli::generate::run(args, &printer)?,
        Commands::Convert(args) => hub::cli::convert::run(args)?,
        Commands::Init(args) => hub::cli::init::run(args, &printer)?,
        Commands::Completions(args) => hub::cli::completions::run(args)?,
    }

    Ok(())
}
