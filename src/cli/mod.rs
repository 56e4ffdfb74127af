pub mod completions;
pub mod convert;
pub mod generate;
pub mod init;

use clap::{Parser, Subcommand};

/// hub - Creative Tools Hub palette generator
#[derive(Parser, Debug)]
#[command(name = "hub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a colour palette from a base colour
    Generate(generate::GenerateArgs),

    /// Convert between hex and HSL
    Convert(convert::ConvertArgs),

    /// Initialize a hub project (generates hub.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
