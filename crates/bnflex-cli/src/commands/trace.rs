//! Trace grammar matching for debugging.

use std::path::PathBuf;

use bnflex_vm::{FuelLimits, PrintTracer, TokenizeError, Verbosity};

use super::run_common;

pub struct TraceArgs {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub verbosity: Verbosity,
    pub fuel: u32,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let grammar =
        run_common::load_grammar(args.grammar_path.as_deref(), args.grammar_text.as_deref());
    let input = run_common::load_input(
        args.input_path.as_deref(),
        args.input_text.as_deref(),
        args.grammar_path.as_deref(),
    );

    let lexer = run_common::compile(&grammar, args.color)
        .with_limits(FuelLimits::new().exec_fuel(args.fuel));
    let mut tracer = PrintTracer::builder(&input, lexer.grammar())
        .verbosity(args.verbosity)
        .colored(args.color)
        .build();

    let result = lexer.tokenize_with(&input, &mut tracer);
    tracer.print();

    match result {
        Ok(_) => {}
        Err(TokenizeError::Runtime(e)) => {
            eprintln!("runtime error: {}", e);
            std::process::exit(2);
        }
        Err(e) => {
            run_common::report_tokenize_error(&e, &input, args.input_path.as_deref(), args.color)
        }
    }
}
