use indexmap::IndexMap;

use super::filter::TraversalOrder;
use super::{NodeRef, ParseTree};

impl ParseTree {
    /// Every descendant of `node` (excluding `node`) in the given order.
    pub fn descendants(&self, node: NodeRef, order: TraversalOrder) -> Vec<NodeRef> {
        let mut out = Vec::new();
        match order {
            TraversalOrder::RootFirst => {
                let mut stack: Vec<NodeRef> = self.children(node).iter().rev().copied().collect();
                while let Some(current) = stack.pop() {
                    out.push(current);
                    stack.extend(self.children(current).iter().rev().copied());
                }
            }
            TraversalOrder::LeafFirst => {
                // Reversed right-to-left pre-order is post-order.
                let mut stack = self.children(node).to_vec();
                while let Some(current) = stack.pop() {
                    out.push(current);
                    stack.extend_from_slice(self.children(current));
                }
                out.reverse();
            }
        }
        out
    }

    /// Descendants grouped by name. Every requested name gets an entry, even if empty.
    pub fn all_by_names(
        &self,
        node: NodeRef,
        order: TraversalOrder,
        names: &[&str],
    ) -> IndexMap<String, Vec<NodeRef>> {
        let mut found: IndexMap<String, Vec<NodeRef>> =
            names.iter().map(|n| (n.to_string(), Vec::new())).collect();
        for current in self.descendants(node, order) {
            if let Some(bucket) = self.name(current).and_then(|n| found.get_mut(n)) {
                bucket.push(current);
            }
        }
        found
    }

    pub fn all_by_name(&self, node: NodeRef, order: TraversalOrder, name: &str) -> Vec<NodeRef> {
        self.descendants(node, order)
            .into_iter()
            .filter(|&d| self.name(d) == Some(name))
            .collect()
    }

    /// First descendant named `name`, in pre-order.
    pub fn first_by_name(&self, node: NodeRef, name: &str) -> Option<NodeRef> {
        let mut stack: Vec<NodeRef> = self.children(node).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            if self.name(current) == Some(name) {
                return Some(current);
            }
            stack.extend(self.children(current).iter().rev().copied());
        }
        None
    }

    /// First direct child named `name`.
    pub fn child_by_name(&self, node: NodeRef, name: &str) -> Option<NodeRef> {
        self.children(node)
            .iter()
            .copied()
            .find(|&c| self.name(c) == Some(name))
    }
}
