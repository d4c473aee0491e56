//! Declarative filters for [`ParseTree::cull`](super::ParseTree::cull).

use indexmap::IndexSet;

use super::{NodeRef, ParseTree};

/// What happens to a node a filter matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CullStrategy {
    /// Leave the node alone. Useful to shield nodes from later filters.
    #[default]
    Keep,
    /// Detach the node and its whole subtree.
    DeleteAll,
    /// Splice the node's children into its parent in its place, dropping the node.
    LiftChildren,
}

/// Order in which multi-node lookups visit descendants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Post-order: a subtree's descendants before its root.
    #[default]
    LeafFirst,
    /// Pre-order: a subtree's root before its descendants.
    RootFirst,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodePredicate {
    /// Name is one of the set.
    Named(IndexSet<String>),
    /// No name at all.
    Unnamed,
    /// Zero-length span.
    Empty,
}

impl NodePredicate {
    pub fn matches(&self, tree: &ParseTree, node: NodeRef) -> bool {
        match self {
            NodePredicate::Named(names) => tree.name(node).is_some_and(|n| names.contains(n)),
            NodePredicate::Unnamed => tree.name(node).is_none(),
            NodePredicate::Empty => tree.span(node).is_empty(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeFilter {
    predicate: NodePredicate,
    strategy: CullStrategy,
}

impl NodeFilter {
    pub fn new(predicate: NodePredicate, strategy: CullStrategy) -> Self {
        Self {
            predicate,
            strategy,
        }
    }

    pub fn by_name<I, S>(strategy: CullStrategy, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect();
        Self::new(NodePredicate::Named(names), strategy)
    }

    pub fn unnamed(strategy: CullStrategy) -> Self {
        Self::new(NodePredicate::Unnamed, strategy)
    }

    /// Deletes nodes that matched no text.
    pub fn remove_empty() -> Self {
        Self::new(NodePredicate::Empty, CullStrategy::DeleteAll)
    }

    pub fn predicate(&self) -> &NodePredicate {
        &self.predicate
    }

    pub fn strategy(&self) -> CullStrategy {
        self.strategy
    }

    pub fn matches(&self, tree: &ParseTree, node: NodeRef) -> bool {
        self.predicate.matches(tree, node)
    }
}
