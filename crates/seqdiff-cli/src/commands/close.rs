//! Close-match command
//!
//! Usage: seqdiff close <WORD> <CANDIDATE>... [-n <N>] [--cutoff <C>]

use clap::Args;
use seqdiff_core::close_matches::{get_close_matches, DEFAULT_CUTOFF, DEFAULT_N};

#[derive(Debug, Args)]
pub struct CloseArgs {
    /// Word to match
    pub word: String,

    /// Candidate words
    #[arg(required = true)]
    pub candidates: Vec<String>,

    /// Maximum number of matches
    #[arg(short = 'n', long, default_value_t = DEFAULT_N)]
    pub n: usize,

    /// Minimum similarity in [0.0, 1.0]
    #[arg(short, long, default_value_t = DEFAULT_CUTOFF)]
    pub cutoff: f64,
}

/// Execute close command
pub fn execute(args: CloseArgs) -> Result<(), Box<dyn std::error::Error>> {
    for word in get_close_matches(&args.word, &args.candidates, args.n, args.cutoff)? {
        println!("{}", word);
    }
    Ok(())
}
