use std::path::PathBuf;

use super::run_common;

pub struct CheckArgs {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let grammar =
        run_common::load_grammar(args.grammar_path.as_deref(), args.grammar_text.as_deref());
    run_common::compile(&grammar, args.color);

    // Silent on success (like cargo check)
}
