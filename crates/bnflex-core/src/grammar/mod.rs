//! Grammar graph: arena of matching nodes addressed by `NodeId`.
//!
//! Nodes are added once and never removed. Child edges may point anywhere in
//! the arena, including back at an ancestor, which is how recursive rules are
//! expressed. `Reference` nodes are placeholders that a compiler rewrites away
//! before the graph is handed to a matcher.

mod dump;
mod node;
mod validate;

#[cfg(test)]
mod dump_tests;

pub use node::{Grammar, GrammarNode, NodeId, NodeKind};
pub use validate::GrammarValidationError;
