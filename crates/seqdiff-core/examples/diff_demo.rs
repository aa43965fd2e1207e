//! Matcher and Differ Demonstration
//!
//! Key concepts illustrated:
//! 1. Matching blocks and opcodes between two strings
//! 2. The three similarity estimates
//! 3. Line deltas with intraline hints, and restoring inputs from them
//! 4. Unified patch output
#![allow(clippy::unwrap_used, clippy::expect_used)]

use seqdiff_core::{
    differ::{ndiff, restore, Side},
    get_close_matches,
    render::{unified_diff, DiffOptions},
    text::split_lines,
    Matcher,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== seqdiff Demo ===\n");

    // ===== Part 1: Character alignment =====
    println!("## Part 1: Character alignment\n");

    let m = Matcher::<char>::new("qabxcd", "abycdf");
    for block in m.matching_blocks() {
        println!("  a[{}] and b[{}] match for {} elements", block.a, block.b, block.size);
    }
    for code in m.opcodes() {
        println!(
            "  {:<7} a[{}:{}] b[{}:{}]",
            code.tag, code.a_start, code.a_end, code.b_start, code.b_end
        );
    }
    println!(
        "  ratio={:.3} quick={:.3} real_quick={:.3}\n",
        m.ratio(),
        m.quick_ratio(),
        m.real_quick_ratio()
    );

    // ===== Part 2: Line deltas =====
    println!("## Part 2: Line deltas\n");

    let before = split_lines("one\ntwo\nthree\n");
    let after = split_lines("ore\ntree\nemu\n");
    let delta = ndiff(&before, &after);
    print!("{}", delta.concat());
    assert_eq!(restore(&delta, Side::A), before);
    assert_eq!(restore(&delta, Side::B), after);
    println!("✓ Both inputs restored from the delta\n");

    // ===== Part 3: Unified patch =====
    println!("## Part 3: Unified patch\n");

    let options = DiffOptions::default().with_files("before.txt", "after.txt");
    print!("{}", unified_diff(&before, &after, &options).concat());

    // ===== Part 4: Close matches =====
    println!("\n## Part 4: Close matches\n");

    let words = ["ape", "apple", "peach", "puppy"];
    println!("  appel -> {:?}", get_close_matches("appel", &words, 3, 0.6)?);

    Ok(())
}
