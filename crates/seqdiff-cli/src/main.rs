//! seqdiff CLI
//!
//! Command-line interface for comparing files and words

use clap::{Parser, Subcommand};
use seqdiff_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "seqdiff")]
#[command(about = "seqdiff - Compare sequences of lines and words", long_about = None)]
struct Cli {
    /// Log operations to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Unified diff of two files
    Unified(commands::diff::PatchArgs),
    /// Context diff of two files
    Context(commands::diff::PatchArgs),
    /// Line-by-line delta with intraline hints
    Ndiff(commands::diff::NdiffArgs),
    /// Edit operations turning one file into the other
    Opcodes(commands::diff::OpcodesArgs),
    /// Similarity ratios of two files
    Ratio(commands::ratio::RatioArgs),
    /// Best close matches for a word
    Close(commands::close::CloseArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Unified(args) => commands::diff::execute_unified(args),
        Commands::Context(args) => commands::diff::execute_context(args),
        Commands::Ndiff(args) => commands::diff::execute_ndiff(args),
        Commands::Opcodes(args) => commands::diff::execute_opcodes(args),
        Commands::Ratio(args) => commands::ratio::execute(args),
        Commands::Close(args) => commands::close::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
