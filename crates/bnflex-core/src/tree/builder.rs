use std::sync::Arc;

use super::{NodeRef, ParseNode, ParseTree, Span};
use crate::grammar::NodeId;

/// Append-only arena used while matching.
///
/// Children are always pushed before their parent, so discarding a failed
/// attempt is a truncation back to a checkpoint taken before it started.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<ParseNode>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checkpoint(&self) -> usize {
        self.nodes.len()
    }

    /// Drop every node pushed since `checkpoint`.
    pub fn truncate(&mut self, checkpoint: usize) {
        self.nodes.truncate(checkpoint);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf(&mut self, grammar_node: NodeId, name: Option<Arc<str>>, span: Span) -> NodeRef {
        self.interior(grammar_node, name, span, Vec::new())
    }

    pub fn interior(
        &mut self,
        grammar_node: NodeId,
        name: Option<Arc<str>>,
        span: Span,
        children: Vec<NodeRef>,
    ) -> NodeRef {
        let id = NodeRef(self.nodes.len() as u32);
        for &child in &children {
            self.nodes[child.index()].parent = Some(id);
        }
        self.nodes.push(ParseNode {
            grammar_node,
            name,
            span,
            value: None,
            children,
            parent: None,
            payload: None,
        });
        id
    }

    /// Give `node` a name if it has none.
    pub fn inherit_name(&mut self, node: NodeRef, name: Option<&Arc<str>>) {
        let slot = &mut self.nodes[node.index()].name;
        if slot.is_none() {
            *slot = name.cloned();
        }
    }

    pub fn finish(self, source: impl Into<String>, root: NodeRef) -> ParseTree {
        ParseTree {
            source: source.into(),
            nodes: self.nodes,
            root,
        }
    }
}
