use clap::{ArgAction, Parser, Subcommand as ClapSubcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Folder holding `<n>.in` / `<n>.out` pairs
    #[arg(index = 1)]
    pub dir: PathBuf,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct GenerateArgs {
    /// Folder to write the cases into, created if missing
    #[arg(index = 1)]
    pub dir: PathBuf,

    /// Number of balanced cases, defaults to the config value
    #[arg(short, long)]
    pub balanced: Option<usize>,

    /// Number of random (usually unbalanced) cases, defaults to the config value
    #[arg(short = 'r', long)]
    pub scrambled: Option<usize>,

    /// Longest bracket string, defaults to the config value
    #[arg(short, long)]
    pub max_length: Option<usize>,

    /// Seed for reproducible cases
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, ClapSubcommand)]
pub enum Subcommand {
    /// Run the validator over a folder of test cases
    Check(CheckArgs),

    /// Write a folder of random test cases with their answers
    Generate(GenerateArgs),
}

/// Reads a bracket count and a bracket string from stdin
/// and prints `Valid` or `Invalid`.
#[derive(Debug, Parser)]
#[command(name = "bracketex", version, about)]
pub struct Args {
    /// Skip non-bracket characters instead of rejecting the input
    #[arg(long, global = true, default_value_t = false)]
    pub lenient: bool,

    /// Use this config file instead of the one in the config directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More logging on stderr, repeat for more detail
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub subcommand: Option<Subcommand>,
}
