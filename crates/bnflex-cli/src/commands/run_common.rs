//! Steps shared by the commands: load, compile, report and exit.

use std::path::Path;
use std::process;

use bnflex_compiler::{BnfCompiler, Error};
use bnflex_vm::{Diagnostic, Lexer, TokenizeError};

use super::loader::{self, GrammarSource};

pub fn load_grammar(path: Option<&Path>, text: Option<&str>) -> GrammarSource {
    loader::load_grammar(path, text).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        process::exit(1);
    })
}

pub fn load_input(
    path: Option<&Path>,
    text: Option<&str>,
    grammar_path: Option<&Path>,
) -> String {
    loader::load_input(path, text, grammar_path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        process::exit(1);
    })
}

/// Compile the grammar, or print why it is invalid and exit.
pub fn compile(grammar: &GrammarSource, color: bool) -> Lexer {
    match BnfCompiler::global().compile(&grammar.text) {
        Ok(lexer) => lexer,
        Err(e) => {
            match e.diagnostic() {
                Some(d) => {
                    let origin = grammar.origin.as_deref();
                    eprintln!("{}", d.render(&grammar.text, origin, color));
                }
                None => eprintln!("error: {}", e),
            }
            process::exit(exit_code(&e));
        }
    }
}

/// Print a tokenize failure against the input and exit.
pub fn report_tokenize_error(
    err: &TokenizeError,
    input: &str,
    origin: Option<&Path>,
    color: bool,
) -> ! {
    let origin = origin.map(|p| {
        if p.as_os_str() == "-" {
            "<stdin>".to_string()
        } else {
            p.display().to_string()
        }
    });
    let rendered = Diagnostic::from(err).render(input, origin.as_deref(), color);
    eprintln!("{}", rendered);
    let code = match err {
        TokenizeError::Runtime(_) => 2,
        _ => 1,
    };
    process::exit(code)
}

fn exit_code(err: &Error) -> i32 {
    match err {
        Error::Runtime(_) => 2,
        _ => 1,
    }
}
