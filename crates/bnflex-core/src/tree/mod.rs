//! Parse tree produced by matching input against a grammar.
//!
//! The tree is an arena of nodes addressed by [`NodeRef`]. Each node keeps its
//! parent index, so structural edits (remove, lift, replace) are child-list
//! splices that never invalidate other handles. A detached node stays in the
//! arena but is no longer reachable from the root.

mod builder;
mod edit;
mod filter;
mod json;
mod printer;
mod query;

#[cfg(test)]
mod edit_tests;
#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use crate::grammar::NodeId;

pub use builder::TreeBuilder;
pub use edit::Replacement;
pub use filter::{CullStrategy, NodeFilter, NodePredicate, TraversalOrder};
pub use json::JsonNode;
pub use printer::TreePrinter;

/// Handle to a node inside a [`ParseTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeRef(u32);

impl NodeRef {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Byte range of the input a node matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ParseNode {
    grammar_node: NodeId,
    name: Option<Arc<str>>,
    span: Span,
    /// Set by `set_value`; otherwise the value is the spanned source text.
    value: Option<String>,
    children: Vec<NodeRef>,
    parent: Option<NodeRef>,
    payload: Option<NodeId>,
}

/// Tree of matched input, owning a copy of that input.
#[derive(Clone, Debug)]
pub struct ParseTree {
    source: String,
    nodes: Vec<ParseNode>,
    root: NodeRef,
}

impl ParseTree {
    pub fn root(&self) -> NodeRef {
        self.root
    }

    /// The full input this tree was matched from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn name(&self, node: NodeRef) -> Option<&str> {
        self.node(node).name.as_deref()
    }

    /// Matched text, or the override installed by [`ParseTree::set_value`].
    pub fn value(&self, node: NodeRef) -> &str {
        let n = self.node(node);
        match &n.value {
            Some(v) => v,
            None => &self.source[n.span.start..n.span.end],
        }
    }

    pub fn span(&self, node: NodeRef) -> Span {
        self.node(node).span
    }

    pub fn children(&self, node: NodeRef) -> &[NodeRef] {
        &self.node(node).children
    }

    pub fn parent(&self, node: NodeRef) -> Option<NodeRef> {
        self.node(node).parent
    }

    /// Grammar node that produced this parse node.
    pub fn grammar_node(&self, node: NodeRef) -> NodeId {
        self.node(node).grammar_node
    }

    /// Grammar node attached via [`Replacement::Payload`], if any.
    pub fn payload(&self, node: NodeRef) -> Option<NodeId> {
        self.node(node).payload
    }

    pub fn is_leaf(&self, node: NodeRef) -> bool {
        self.node(node).children.is_empty()
    }

    /// Whether the node is still reachable from the root.
    pub fn is_attached(&self, node: NodeRef) -> bool {
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current == self.root
    }

    fn node(&self, node: NodeRef) -> &ParseNode {
        &self.nodes[node.index()]
    }

    fn node_mut(&mut self, node: NodeRef) -> &mut ParseNode {
        &mut self.nodes[node.index()]
    }
}
