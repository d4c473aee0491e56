//! Core data structures for bnflex.
//!
//! Two halves:
//! - **Grammar graph** (`Grammar`, `GrammarNode`): the compiled, executable
//!   matching graph. Nodes live in an arena and refer to each other by
//!   `NodeId`, so rules may be self or mutually recursive.
//! - **Parse tree** (`ParseTree`): the arena-backed tree produced by matching
//!   input, together with the structural edit vocabulary (cull, lift, split,
//!   join) used to post-process it.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod colors;
pub mod grammar;
pub mod tree;
pub mod utils;

pub use colors::Colors;
pub use grammar::{Grammar, GrammarNode, GrammarValidationError, NodeId, NodeKind};
pub use tree::{
    CullStrategy, NodeFilter, NodePredicate, NodeRef, ParseTree, Replacement, Span, TraversalOrder,
    TreeBuilder, TreePrinter,
};
