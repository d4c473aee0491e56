//! Structural edits on a [`ParseTree`].

use super::filter::{CullStrategy, NodeFilter};
use super::{NodeRef, ParseTree};
use crate::grammar::NodeId;

/// What [`ParseTree::replace_with`] puts in place of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Replacement {
    /// Swap another node of the same tree into this node's position.
    Node(NodeRef),
    /// Keep the node where it is and attach a compiled grammar node to it.
    Payload(NodeId),
}

impl From<NodeRef> for Replacement {
    fn from(node: NodeRef) -> Self {
        Replacement::Node(node)
    }
}

impl From<NodeId> for Replacement {
    fn from(id: NodeId) -> Self {
        Replacement::Payload(id)
    }
}

impl ParseTree {
    /// Detach `node` from its parent. The root has no parent and is left as is.
    pub fn remove(&mut self, node: NodeRef) {
        let Some(parent) = self.parent(node) else {
            return;
        };
        self.node_mut(parent).children.retain(|&c| c != node);
        self.node_mut(node).parent = None;
    }

    /// Splice the children of `node` into its parent at its position, then detach it.
    ///
    /// No-op on the root.
    pub fn lift_children(&mut self, node: NodeRef) {
        let Some(parent) = self.parent(node) else {
            return;
        };
        let children = std::mem::take(&mut self.node_mut(node).children);
        for &child in &children {
            self.node_mut(child).parent = Some(parent);
        }
        let siblings = &mut self.node_mut(parent).children;
        if let Some(pos) = siblings.iter().position(|&c| c == node) {
            siblings.splice(pos..=pos, children);
        }
        self.node_mut(node).parent = None;
    }

    /// Replace `node` with another node, or attach a payload to it.
    ///
    /// A replacement node is detached from wherever it was first. It must not
    /// be an ancestor of `node`. Replacing the root makes the other node the root.
    pub fn replace_with(&mut self, node: NodeRef, with: impl Into<Replacement>) {
        match with.into() {
            Replacement::Payload(id) => self.node_mut(node).payload = Some(id),
            Replacement::Node(other) if other == node => {}
            Replacement::Node(other) => {
                debug_assert!(!self.is_ancestor(other, node), "replacement is an ancestor");
                self.remove(other);
                match self.parent(node) {
                    Some(parent) => {
                        let siblings = &mut self.node_mut(parent).children;
                        if let Some(pos) = siblings.iter().position(|&c| c == node) {
                            siblings[pos] = other;
                        }
                        self.node_mut(other).parent = Some(parent);
                        self.node_mut(node).parent = None;
                    }
                    None => self.root = other,
                }
            }
        }
    }

    /// Overwrite the value reported for `node`. Spans are unaffected.
    pub fn set_value(&mut self, node: NodeRef, value: impl Into<String>) {
        self.node_mut(node).value = Some(value.into());
    }

    /// Group the children of `node`, starting a new group at each child named
    /// `delimiter`. Delimiters are dropped.
    pub fn split_children(&self, node: NodeRef, delimiter: &str) -> Vec<Vec<NodeRef>> {
        let mut groups = vec![Vec::new()];
        for &child in self.children(node) {
            if self.name(child) == Some(delimiter) {
                groups.push(Vec::new());
            } else if let Some(group) = groups.last_mut() {
                group.push(child);
            }
        }
        groups
    }

    /// Leaf nodes under `node` in depth-first order. A leaf yields itself.
    pub fn leaves(&self, node: NodeRef) -> Vec<NodeRef> {
        let mut leaves = Vec::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            let children = self.children(current);
            if children.is_empty() {
                leaves.push(current);
            } else {
                stack.extend(children.iter().rev().copied());
            }
        }
        leaves
    }

    pub fn join_leaves(&self, node: NodeRef, separator: &str) -> String {
        let values: Vec<&str> = self.leaves(node).into_iter().map(|l| self.value(l)).collect();
        values.join(separator)
    }

    /// Apply `filters` to every descendant of `node`, leaf-first.
    ///
    /// Each node is handled by the first filter that matches it. `node` itself
    /// is never culled.
    pub fn cull(&mut self, node: NodeRef, filters: &[NodeFilter]) {
        let children = self.children(node).to_vec();
        for child in children {
            self.cull(child, filters);
            let strategy = filters
                .iter()
                .find(|f| f.matches(self, child))
                .map_or(CullStrategy::Keep, NodeFilter::strategy);
            match strategy {
                CullStrategy::Keep => {}
                CullStrategy::DeleteAll => self.remove(child),
                CullStrategy::LiftChildren => self.lift_children(child),
            }
        }
    }

    fn is_ancestor(&self, candidate: NodeRef, node: NodeRef) -> bool {
        let mut current = self.parent(node);
        while let Some(p) = current {
            if p == candidate {
                return true;
            }
            current = self.parent(p);
        }
        false
    }
}
