//! Ratio command
//!
//! Usage: seqdiff ratio <FROM> <TO>

use clap::Args;
use seqdiff_core::matcher::Matcher;
use seqdiff_core::text::read_lines;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RatioArgs {
    /// First file
    pub from: PathBuf,

    /// Second file
    pub to: PathBuf,
}

/// Execute ratio command
pub fn execute(args: RatioArgs) -> Result<(), Box<dyn std::error::Error>> {
    let matcher = Matcher::new(read_lines(&args.from)?, read_lines(&args.to)?);

    println!("ratio: {:.6}", matcher.ratio());
    println!("quick_ratio: {:.6}", matcher.quick_ratio());
    println!("real_quick_ratio: {:.6}", matcher.real_quick_ratio());
    Ok(())
}
