//! Command builders for the CLI.
//!
//! Every command accepts the full flag set; flags a command does not use
//! are hidden from its `--help` and ignored.

use clap::Command;

use super::args::*;

/// Add hidden input args (for commands that only read a grammar).
fn with_hidden_input_args(cmd: Command) -> Command {
    cmd.arg(input_path_arg().hide(true))
        .arg(input_text_arg().hide(true))
}

/// Add hidden tree output args (for commands that don't print a tree).
fn with_hidden_output_args(cmd: Command) -> Command {
    cmd.arg(spans_arg().hide(true))
        .arg(json_arg().hide(true))
        .arg(compact_arg().hide(true))
}

/// Add hidden trace args (for commands that don't trace).
fn with_hidden_trace_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg().hide(true))
        .arg(fuel_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("bnflex")
        .about("Compile BNF grammars into tokenizers and run them")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(tokenize_command())
        .subcommand(trace_command())
        .subcommand(dump_command())
}

/// Validate a grammar.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a grammar")
        .override_usage(
            "\
  bnflex check <GRAMMAR>
  bnflex check -g <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  bnflex check json.bnf                    # silent when valid
  bnflex check -g 'root ::= "a" | "b"'     # inline grammar"#,
        )
        .arg(grammar_path_arg())
        .arg(grammar_text_arg())
        .arg(color_arg());

    with_hidden_trace_args(with_hidden_output_args(with_hidden_input_args(cmd)))
}

/// Tokenize input and print the parse tree.
pub fn tokenize_command() -> Command {
    let cmd = Command::new("tokenize")
        .about("Tokenize input and print the parse tree")
        .override_usage(
            "\
  bnflex tokenize <GRAMMAR> <INPUT>
  bnflex tokenize <GRAMMAR> -s <TEXT>
  bnflex tokenize -g <TEXT> <INPUT>",
        )
        .after_help(
            r#"EXAMPLES:
  bnflex tokenize json.bnf data.json           # indented tree
  bnflex tokenize json.bnf data.json --spans   # with byte spans
  bnflex tokenize json.bnf - --json < a.json   # JSON tree from stdin
  bnflex tokenize -g 'root ::= [0-9]+' -s 42   # all inline"#,
        )
        .arg(grammar_path_arg())
        .arg(input_path_arg())
        .arg(grammar_text_arg())
        .arg(input_text_arg())
        .arg(spans_arg())
        .arg(json_arg())
        .arg(compact_arg())
        .arg(fuel_arg())
        .arg(color_arg());

    cmd.arg(verbose_arg().hide(true))
}

/// Trace matching step by step.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace grammar matching for debugging")
        .override_usage(
            "\
  bnflex trace <GRAMMAR> <INPUT>
  bnflex trace <GRAMMAR> -s <TEXT> [-v|-vv]",
        )
        .after_help(
            r#"EXAMPLES:
  bnflex trace json.bnf -s '[1]'          # named nodes only
  bnflex trace json.bnf -s '[1]' -vv      # every node, with lookahead
  bnflex trace json.bnf big.json --fuel 10000"#,
        )
        .arg(grammar_path_arg())
        .arg(input_path_arg())
        .arg(grammar_text_arg())
        .arg(input_text_arg())
        .arg(verbose_arg())
        .arg(fuel_arg())
        .arg(color_arg());

    with_hidden_output_args(cmd)
}

/// Show the compiled grammar graph.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the compiled grammar graph")
        .override_usage(
            "\
  bnflex dump <GRAMMAR>
  bnflex dump -g <TEXT>",
        )
        .arg(grammar_path_arg())
        .arg(grammar_text_arg())
        .arg(color_arg());

    with_hidden_trace_args(with_hidden_output_args(with_hidden_input_args(cmd)))
}
