//! Rule table: definitions by name, alias chains, and reference linking.
//!
//! A rule whose body is a bare `Reference` is an alias. Aliases are followed
//! until a real definition is reached, and every edge into a `Reference` is
//! then rewritten to point at that definition. Rewriting edges instead of
//! copying bodies is what lets rules recurse into each other.

use bnflex_core::{Grammar, NodeId, NodeKind};
use indexmap::{IndexMap, IndexSet};

use crate::{Error, Result};

pub(crate) const ROOT_RULE: &str = "root";

#[derive(Clone, Debug, Default)]
pub(crate) struct RuleTable {
    rules: IndexMap<String, NodeId>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, name: String, body: NodeId) -> Result<()> {
        if self.rules.contains_key(&name) {
            return Err(Error::DuplicateRule { name });
        }
        self.rules.insert(name, body);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.rules.get(name).copied()
    }

    /// Reject alias chains that loop back on themselves. A chain ending in an
    /// undefined name is left for [`RuleTable::resolve`] to report.
    pub fn check_aliases(&self, grammar: &Grammar) -> Result<()> {
        for (name, &body) in &self.rules {
            let mut chain = vec![name.clone()];
            let mut current = body;
            while let NodeKind::Reference(target) = grammar[current].kind() {
                let looped = chain.contains(target);
                chain.push(target.clone());
                if looped {
                    return Err(Error::CircularReference { chain });
                }
                match self.get(target) {
                    Some(next) => current = next,
                    None => break,
                }
            }
        }
        Ok(())
    }

    /// Follow the alias chain starting at rule `name` to its definition.
    ///
    /// Must run after [`RuleTable::check_aliases`].
    pub fn resolve(&self, grammar: &Grammar, name: &str, referenced_from: &str) -> Result<NodeId> {
        let mut name = name;
        let mut from = referenced_from;
        loop {
            let Some(body) = self.get(name) else {
                return Err(Error::UndefinedRule {
                    name: name.to_string(),
                    referenced_from: from.to_string(),
                });
            };
            match grammar[body].kind() {
                NodeKind::Reference(target) => {
                    from = name;
                    name = target;
                }
                _ => return Ok(body),
            }
        }
    }

    /// The definition the `root` rule resolves to.
    pub fn root(&self, grammar: &Grammar) -> Result<NodeId> {
        let body = self.get(ROOT_RULE).ok_or(Error::MissingRoot)?;
        match grammar[body].kind() {
            NodeKind::Reference(target) => self.resolve(grammar, target, ROOT_RULE),
            _ => Ok(body),
        }
    }

    /// Rewrite every edge reachable from `root` that points at a `Reference`
    /// so it points at the referenced definition instead.
    pub fn link(&self, grammar: &mut Grammar, root: NodeId) -> Result<()> {
        let owners: IndexMap<NodeId, &str> = self
            .rules
            .iter()
            .map(|(name, &body)| (body, name.as_str()))
            .collect();

        let mut seen = IndexSet::new();
        let mut stack = vec![(root, owners.get(&root).copied().unwrap_or(ROOT_RULE))];
        while let Some((id, owner)) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            let children = grammar[id].children().to_vec();
            for (i, child) in children.into_iter().enumerate() {
                let target = match grammar[child].kind() {
                    NodeKind::Reference(name) => {
                        let target = self.resolve(grammar, name, owner)?;
                        grammar.children_mut(id)[i] = target;
                        target
                    }
                    _ => child,
                };
                let owner = owners.get(&target).copied().unwrap_or(owner);
                stack.push((target, owner));
            }
        }
        Ok(())
    }
}
