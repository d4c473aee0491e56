//! Static checks that keep matching terminating.
//!
//! Two ways a backtracking matcher can spin forever on a finite input:
//! - a `Repeat` whose child can succeed without consuming anything
//! - a cycle of nodes that re-enters itself at the same position (left recursion)
//!
//! Both are detected on the graph reachable from the root before any input is seen.

use super::node::{Grammar, NodeId, NodeKind};

const ANONYMOUS: &str = "<anonymous>";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarValidationError {
    /// A repetition whose body can match the empty string would never stop.
    #[error("repetition in `{rule}` can match empty input")]
    NullableRepeat { rule: String },

    /// A rule can reach itself without consuming input.
    #[error("left recursion: {}", .chain.join(" -> "))]
    LeftRecursion { chain: Vec<String> },

    /// A placeholder was left in the graph.
    #[error("unresolved reference to `{name}`")]
    UnresolvedReference { name: String },
}

impl Grammar {
    /// Check the graph reachable from `root`.
    pub fn validate(&self, root: NodeId) -> Result<(), GrammarValidationError> {
        let reachable = self.reachable(root);
        let owners = self.owners(root);

        for &id in &reachable {
            if let NodeKind::Reference(name) = self[id].kind() {
                return Err(GrammarValidationError::UnresolvedReference { name: name.clone() });
            }
        }

        let nullable = self.nullable(&reachable);

        for &id in &reachable {
            if let NodeKind::Repeat(child) = self[id].kind()
                && nullable[child.index()]
            {
                return Err(GrammarValidationError::NullableRepeat {
                    rule: owners[id.index()].clone().unwrap_or_else(|| ANONYMOUS.to_string()),
                });
            }
        }

        if let Some(cycle) = self.find_left_recursion(&reachable, &nullable) {
            let mut chain: Vec<String> = cycle
                .iter()
                .filter_map(|&id| self[id].name().map(str::to_string))
                .collect();
            if chain.len() < 2 {
                let owner = owners[cycle[0].index()]
                    .clone()
                    .unwrap_or_else(|| ANONYMOUS.to_string());
                chain = vec![owner.clone(), owner];
            }
            return Err(GrammarValidationError::LeftRecursion { chain });
        }

        Ok(())
    }

    /// Whether each node can succeed without consuming input.
    ///
    /// Indexed by `NodeId`; nodes outside `reachable` stay `false`.
    pub fn nullable(&self, reachable: &[NodeId]) -> Vec<bool> {
        let mut nullable = vec![false; self.len()];
        loop {
            let mut changed = false;
            for &id in reachable {
                if nullable[id.index()] {
                    continue;
                }
                let is_nullable = match self[id].kind() {
                    NodeKind::Literal(text) => text.is_empty(),
                    NodeKind::CharSet { .. }
                    | NodeKind::CharRange { .. }
                    | NodeKind::Reference(_) => false,
                    NodeKind::Sequence(children) => children.iter().all(|c| nullable[c.index()]),
                    NodeKind::Choice(alts) => alts.iter().any(|c| nullable[c.index()]),
                    NodeKind::Repeat(child) => nullable[child.index()],
                    NodeKind::Optional(_) | NodeKind::Negation(_) | NodeKind::EndOfInput => true,
                };
                if is_nullable {
                    nullable[id.index()] = true;
                    changed = true;
                }
            }
            if !changed {
                return nullable;
            }
        }
    }

    /// Nearest named ancestor (or self) of each node, by first visit from `root`.
    fn owners(&self, root: NodeId) -> Vec<Option<String>> {
        let mut owners = vec![None; self.len()];
        let mut seen = vec![false; self.len()];
        let mut stack = vec![(root, None::<String>)];
        while let Some((id, inherited)) = stack.pop() {
            if std::mem::replace(&mut seen[id.index()], true) {
                continue;
            }
            let owner = self[id].name().map(str::to_string).or(inherited);
            for &child in self[id].children().iter().rev() {
                stack.push((child, owner.clone()));
            }
            owners[id.index()] = owner;
        }
        owners
    }

    /// Children a node may enter at its own start position.
    fn entry_edges(&self, id: NodeId, nullable: &[bool]) -> Vec<NodeId> {
        match self[id].kind() {
            NodeKind::Sequence(children) => {
                let mut edges = Vec::new();
                for &child in children {
                    edges.push(child);
                    if !nullable[child.index()] {
                        break;
                    }
                }
                edges
            }
            NodeKind::Choice(alts) => alts.clone(),
            NodeKind::Repeat(child) | NodeKind::Optional(child) | NodeKind::Negation(child) => {
                vec![*child]
            }
            _ => Vec::new(),
        }
    }

    fn find_left_recursion(&self, reachable: &[NodeId], nullable: &[bool]) -> Option<Vec<NodeId>> {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Mark {
            New,
            Active,
            Done,
        }

        fn visit(
            grammar: &Grammar,
            id: NodeId,
            nullable: &[bool],
            marks: &mut [Mark],
            path: &mut Vec<NodeId>,
        ) -> Option<Vec<NodeId>> {
            match marks[id.index()] {
                Mark::Done => return None,
                Mark::Active => {
                    let start = path.iter().position(|&p| p == id)?;
                    let mut cycle = path[start..].to_vec();
                    cycle.push(id);
                    return Some(cycle);
                }
                Mark::New => {}
            }

            marks[id.index()] = Mark::Active;
            path.push(id);
            for next in grammar.entry_edges(id, nullable) {
                if let Some(cycle) = visit(grammar, next, nullable, marks, path) {
                    return Some(cycle);
                }
            }
            path.pop();
            marks[id.index()] = Mark::Done;
            None
        }

        let mut marks = vec![Mark::New; self.len()];
        let mut path = Vec::new();
        reachable
            .iter()
            .find_map(|&id| visit(self, id, nullable, &mut marks, &mut path))
    }
}
