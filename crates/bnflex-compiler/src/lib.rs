//! Compiler from BNF dialect text to a bnflex tokenizer.
//!
//! The dialect is parsed by bnflex itself:
//! - `bootstrap` - the hand-built grammar of the dialect
//! - `compiler` - `BnfCompiler`, the tokenize, cull and lower pipeline
//! - `analyze` - rule table, alias chains and reference linking
//!
//! ```
//! let lexer = bnflex_compiler::compile(r#"root ::= [0-9]+ ("." [0-9]+)?"#).unwrap();
//! let tree = lexer.tokenize("3.14").unwrap();
//! assert_eq!(tree.name(tree.root()), Some("root"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod analyze;
pub mod bootstrap;
pub mod compiler;
mod lower;

#[cfg(test)]
mod bootstrap_tests;
#[cfg(test)]
mod lower_tests;
#[cfg(test)]
pub mod test_utils;

use std::path::{Path, PathBuf};

use bnflex_core::GrammarValidationError;
use bnflex_vm::{Diagnostic, Lexer, RuntimeError};

pub use compiler::BnfCompiler;

/// Errors that can occur while compiling a grammar.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dialect text does not parse.
    #[error("syntax error at {line}:{column}: unexpected {found}")]
    Syntax {
        line: usize,
        column: usize,
        /// Byte offset into the grammar source.
        position: usize,
        found: String,
    },

    #[error("grammar has no `root` rule")]
    MissingRoot,

    /// A chain of rules that only alias each other and never reach a definition.
    #[error("circular reference: {}", chain.join(" -> "))]
    CircularReference { chain: Vec<String> },

    #[error("undefined rule `{name}` referenced from `{referenced_from}`")]
    UndefinedRule {
        name: String,
        referenced_from: String,
    },

    #[error("rule `{name}` is defined more than once")]
    DuplicateRule { name: String },

    #[error("invalid range: `{start}` is after `{end}`")]
    InvalidRange { start: char, end: char },

    /// The compiled grammar could loop forever on some input.
    #[error(transparent)]
    Configuration(#[from] GrammarValidationError),

    /// The dialect parser hit a runtime limit, e.g. groups nested too deeply.
    #[error("grammar could not be parsed: {0}")]
    Runtime(#[from] RuntimeError),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Source-anchored rendering, for errors that point into the grammar text.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        match self {
            Error::Syntax {
                position, found, ..
            } => Some(
                Diagnostic::error(*position, *position, "invalid grammar syntax")
                    .with_label(format!("unexpected {found}")),
            ),
            _ => None,
        }
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Compile grammar text with the process-wide compiler.
pub fn compile(source: &str) -> Result<Lexer> {
    BnfCompiler::global().compile(source)
}

/// Compile the grammar stored at `path` with the process-wide compiler.
pub fn compile_file(path: impl AsRef<Path>) -> Result<Lexer> {
    BnfCompiler::global().compile_file(path)
}
