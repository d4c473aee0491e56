//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so commands can compose the same
//! definition, hidden or not.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Grammar file (positional). `-` reads stdin.
pub fn grammar_path_arg() -> Arg {
    Arg::new("grammar_path")
        .value_name("GRAMMAR")
        .value_parser(value_parser!(PathBuf))
        .help("Grammar file, or - for stdin")
}

/// Inline grammar text (-g/--grammar).
pub fn grammar_text_arg() -> Arg {
    Arg::new("grammar_text")
        .short('g')
        .long("grammar")
        .value_name("TEXT")
        .help("Inline grammar text")
}

/// Input file to tokenize (positional). `-` reads stdin.
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .help("Input file, or - for stdin")
}

/// Inline input text (-s/--source).
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .help("Inline input text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Show byte spans (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show byte spans of tree nodes")
}

/// Print the tree as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the parse tree as JSON")
}

/// Single-line JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .requires("json")
        .help("Print JSON on a single line")
}

/// Trace verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}

/// Execution fuel (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .default_value("100000000")
        .value_parser(value_parser!(u32))
        .help("Execution fuel limit (node visits)")
}
