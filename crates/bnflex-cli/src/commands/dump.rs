use std::path::PathBuf;

use super::run_common;

pub struct DumpArgs {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let grammar =
        run_common::load_grammar(args.grammar_path.as_deref(), args.grammar_text.as_deref());
    let lexer = run_common::compile(&grammar, args.color);
    print!("{}", lexer.grammar().dump(lexer.root()));
}
