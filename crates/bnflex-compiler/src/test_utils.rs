//! Helpers shared by the compiler tests.

use bnflex_core::TreePrinter;
use bnflex_vm::Lexer;

use crate::{Error, compile};

pub fn compile_ok(source: &str) -> Lexer {
    compile(source).unwrap_or_else(|err| panic!("grammar should compile: {err}"))
}

pub fn compile_err(source: &str) -> Error {
    match compile(source) {
        Ok(_) => panic!("grammar should be rejected:\n{source}"),
        Err(err) => err,
    }
}

/// The compiled grammar printed back as dialect text.
pub fn dump(source: &str) -> String {
    let lexer = compile_ok(source);
    lexer.grammar().dump(lexer.root())
}

/// The tree `input` tokenizes to under `lexer`.
pub fn tree(lexer: &Lexer, input: &str) -> String {
    let tree = lexer
        .tokenize(input)
        .unwrap_or_else(|err| panic!("input should tokenize: {err}"));
    TreePrinter::new(&tree).dump()
}
