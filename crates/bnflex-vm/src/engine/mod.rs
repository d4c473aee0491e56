//! Backtracking matcher over a grammar graph.
//!
//! Matching is recursive descent with ordered choice. Parse nodes are pushed
//! into a `TreeBuilder` arena as children succeed; a failed attempt truncates
//! the arena back to where it started, so nothing partial survives.

mod error;
mod matcher;
mod trace;

#[cfg(test)]
mod matcher_tests;

pub use error::{RuntimeError, TokenizeError};
pub use matcher::{FuelLimits, MatchOutcome, Matched, match_at};
pub use trace::{NoopTracer, PrintTracer, PrintTracerBuilder, Tracer, Verbosity};
