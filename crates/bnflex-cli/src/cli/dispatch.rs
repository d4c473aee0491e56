//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs hold what a command reads from clap, ignoring hidden flags
//! - `From<*Params>` impls resolve color and verbosity for the command handlers
//! - with `-g`, a single positional is the input, not the grammar

use std::path::PathBuf;

use bnflex_vm::Verbosity;
use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::tokenize::TokenizeArgs;
use crate::commands::trace::TraceArgs;

const DEFAULT_FUEL: u32 = 100_000_000;

pub struct CheckParams {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: m.get_one::<PathBuf>("grammar_path").cloned(),
            grammar_text: m.get_one::<String>("grammar_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            grammar_text: p.grammar_text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokenizeParams {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub spans: bool,
    pub json: bool,
    pub compact: bool,
    pub fuel: u32,
    pub color: ColorChoice,
}

impl TokenizeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let grammar_text = m.get_one::<String>("grammar_text").cloned();
        let (grammar_path, input_path) = shift_positional_to_input(
            grammar_text.is_some(),
            m.get_one::<PathBuf>("grammar_path").cloned(),
            m.get_one::<PathBuf>("input_path").cloned(),
        );

        Self {
            grammar_path,
            grammar_text,
            input_path,
            input_text: m.get_one::<String>("input_text").cloned(),
            spans: m.get_flag("spans"),
            json: m.get_flag("json"),
            compact: m.get_flag("compact"),
            fuel: parse_fuel(m),
            color: parse_color(m),
        }
    }
}

impl From<TokenizeParams> for TokenizeArgs {
    fn from(p: TokenizeParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            grammar_text: p.grammar_text,
            input_path: p.input_path,
            input_text: p.input_text,
            spans: p.spans,
            json: p.json,
            compact: p.compact,
            fuel: p.fuel,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub verbose: u8,
    pub fuel: u32,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let grammar_text = m.get_one::<String>("grammar_text").cloned();
        let (grammar_path, input_path) = shift_positional_to_input(
            grammar_text.is_some(),
            m.get_one::<PathBuf>("grammar_path").cloned(),
            m.get_one::<PathBuf>("input_path").cloned(),
        );

        Self {
            grammar_path,
            grammar_text,
            input_path,
            input_text: m.get_one::<String>("input_text").cloned(),
            verbose: m.get_count("verbose"),
            fuel: parse_fuel(m),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            grammar_path: p.grammar_path,
            grammar_text: p.grammar_text,
            input_path: p.input_path,
            input_text: p.input_text,
            verbosity,
            fuel: p.fuel,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: m.get_one::<PathBuf>("grammar_path").cloned(),
            grammar_text: m.get_one::<String>("grammar_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            grammar_text: p.grammar_text,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_fuel(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("fuel").copied().unwrap_or(DEFAULT_FUEL)
}

/// With `-g`, a lone positional names the input: `bnflex tokenize -g '...' data.txt`.
fn shift_positional_to_input(
    has_grammar_text: bool,
    grammar_path: Option<PathBuf>,
    input_path: Option<PathBuf>,
) -> (Option<PathBuf>, Option<PathBuf>) {
    if has_grammar_text && grammar_path.is_some() && input_path.is_none() {
        (None, grammar_path)
    } else {
        (grammar_path, input_path)
    }
}
