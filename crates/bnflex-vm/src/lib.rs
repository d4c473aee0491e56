//! Runtime for bnflex grammars.
//!
//! This crate matches a grammar graph against input text:
//! - `engine` - the backtracking matcher, fuel limits, tracing
//! - `Lexer` - validated grammar plus the whole-input `tokenize` entry point
//! - `diagnostics` - annotate-snippets rendering for user-facing errors

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod engine;
mod lexer;

#[cfg(test)]
mod diagnostics_tests;

pub use diagnostics::Diagnostic;
pub use engine::{
    FuelLimits, MatchOutcome, Matched, NoopTracer, PrintTracer, RuntimeError, TokenizeError,
    Tracer, Verbosity, match_at,
};
pub use lexer::Lexer;
