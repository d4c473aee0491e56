//! Tokenize input and print the resulting tree.

use std::io::{self, Write};
use std::path::PathBuf;

use bnflex_core::{Colors, TreePrinter};
use bnflex_vm::FuelLimits;

use super::run_common;

pub struct TokenizeArgs {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub spans: bool,
    pub json: bool,
    pub compact: bool,
    pub fuel: u32,
    pub color: bool,
}

pub fn run(args: TokenizeArgs) {
    let grammar =
        run_common::load_grammar(args.grammar_path.as_deref(), args.grammar_text.as_deref());
    let input = run_common::load_input(
        args.input_path.as_deref(),
        args.input_text.as_deref(),
        args.grammar_path.as_deref(),
    );

    let lexer = run_common::compile(&grammar, args.color)
        .with_limits(FuelLimits::new().exec_fuel(args.fuel));
    let tree = match lexer.tokenize(&input) {
        Ok(tree) => tree,
        Err(e) => {
            run_common::report_tokenize_error(&e, &input, args.input_path.as_deref(), args.color)
        }
    };

    if args.json {
        let view = tree.json_view(tree.root());
        let mut out = io::stdout().lock();
        let written = if args.compact {
            serde_json::to_writer(&mut out, &view)
        } else {
            serde_json::to_writer_pretty(&mut out, &view)
        };
        if let Err(e) = written.map_err(io::Error::from).and_then(|()| writeln!(out)) {
            eprintln!("error: failed to write JSON: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let printer = TreePrinter::new(&tree)
        .with_spans(args.spans)
        .colored(Colors::new(args.color));
    print!("{}", printer.dump());
}
