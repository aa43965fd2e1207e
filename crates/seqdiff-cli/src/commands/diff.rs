//! File comparison commands
//!
//! Usage:
//!   seqdiff unified <FROM> <TO> [-n <N>]
//!   seqdiff context <FROM> <TO> [-n <N>]
//!   seqdiff ndiff <FROM> <TO> [--line-junk] [--no-char-junk]
//!   seqdiff opcodes <FROM> <TO> [--json]

use clap::Args;
use seqdiff_core::junk::{character_junk, line_junk};
use seqdiff_core::matcher::{Matcher, DEFAULT_CONTEXT};
use seqdiff_core::render::{context_diff, unified_diff, DiffOptions};
use seqdiff_core::text::read_lines;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct PatchArgs {
    /// Original file
    pub from: PathBuf,

    /// Changed file
    pub to: PathBuf,

    /// Lines of context around each change
    #[arg(short = 'n', long = "context", default_value_t = DEFAULT_CONTEXT)]
    pub n: usize,
}

#[derive(Debug, Args)]
pub struct NdiffArgs {
    /// Original file
    pub from: PathBuf,

    /// Changed file
    pub to: PathBuf,

    /// Treat blank lines and lone '#' lines as junk
    #[arg(long)]
    pub line_junk: bool,

    /// Let spaces and tabs anchor intraline matches
    #[arg(long)]
    pub no_char_junk: bool,
}

#[derive(Debug, Args)]
pub struct OpcodesArgs {
    /// Original file
    pub from: PathBuf,

    /// Changed file
    pub to: PathBuf,

    /// Print opcodes as a JSON array
    #[arg(long)]
    pub json: bool,
}

fn load(from: &Path, to: &Path) -> Result<(Vec<String>, Vec<String>), Box<dyn std::error::Error>> {
    Ok((read_lines(from)?, read_lines(to)?))
}

fn patch_options(args: &PatchArgs) -> DiffOptions {
    DiffOptions::default()
        .with_files(args.from.display().to_string(), args.to.display().to_string())
        .with_context(args.n)
}

/// Execute unified command
pub fn execute_unified(args: PatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (a, b) = load(&args.from, &args.to)?;
    print!("{}", unified_diff(&a, &b, &patch_options(&args)).concat());
    Ok(())
}

/// Execute context command
pub fn execute_context(args: PatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (a, b) = load(&args.from, &args.to)?;
    print!("{}", context_diff(&a, &b, &patch_options(&args)).concat());
    Ok(())
}

/// Execute ndiff command
pub fn execute_ndiff(args: NdiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (a, b) = load(&args.from, &args.to)?;
    let linejunk = args.line_junk.then(line_junk);
    let charjunk = (!args.no_char_junk).then(character_junk);
    print!(
        "{}",
        seqdiff_core::ndiff_with(&a, &b, linejunk, charjunk).concat()
    );
    Ok(())
}

/// Execute opcodes command
pub fn execute_opcodes(args: OpcodesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (a, b) = load(&args.from, &args.to)?;
    let matcher = Matcher::new(a, b);

    if args.json {
        println!("{}", serde_json::to_string_pretty(matcher.opcodes())?);
        return Ok(());
    }

    for code in matcher.opcodes() {
        println!(
            "{:<7} a[{}:{}] b[{}:{}]",
            code.tag.as_str(),
            code.a_start,
            code.a_end,
            code.b_start,
            code.b_end
        );
    }
    Ok(())
}
