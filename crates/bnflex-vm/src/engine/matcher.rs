use bnflex_core::{Grammar, NodeId, NodeKind, NodeRef, ParseTree, Span, TreeBuilder};

use super::error::RuntimeError;
use super::trace::Tracer;

/// Runtime limits for a single match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FuelLimits {
    /// Maximum node visits (default: 100,000,000).
    pub(crate) exec_fuel: u32,
    /// Maximum nesting depth (default: 256). Every level is a native call
    /// pair, so the default has to trip well inside a 2 MiB thread stack
    /// even in debug builds.
    pub(crate) recursion_limit: u32,
}

impl Default for FuelLimits {
    fn default() -> Self {
        Self {
            exec_fuel: 100_000_000,
            recursion_limit: 256,
        }
    }
}

impl FuelLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn get_exec_fuel(&self) -> u32 {
        self.exec_fuel
    }

    pub fn get_recursion_limit(&self) -> u32 {
        self.recursion_limit
    }
}

/// A successful match: the tree and the byte offset just past it.
#[derive(Debug)]
pub struct Matched {
    pub tree: ParseTree,
    pub end: usize,
}

#[derive(Debug)]
pub struct MatchOutcome {
    pub matched: Option<Matched>,
    /// Furthest offset at which a terminal was tried and failed, outside of
    /// negative lookahead. Never less than the starting position.
    pub furthest_failure: usize,
}

/// Match `node` against `input` starting at byte offset `position`.
///
/// `Ok` with no match is an ordinary failure; `Err` means the matcher could
/// not run to completion. A `position` that is not a character boundary of
/// `input` never matches.
pub fn match_at<T: Tracer>(
    grammar: &Grammar,
    node: NodeId,
    input: &str,
    position: usize,
    limits: FuelLimits,
    tracer: &mut T,
) -> Result<MatchOutcome, RuntimeError> {
    if !input.is_char_boundary(position) {
        return Ok(MatchOutcome {
            matched: None,
            furthest_failure: position,
        });
    }

    let mut matcher = Matcher {
        grammar,
        input,
        builder: TreeBuilder::new(),
        tracer,
        fuel: limits.exec_fuel,
        limits,
        depth: 0,
        furthest: position,
        lookahead: 0,
    };

    let result = matcher.match_node(node, position)?;
    let furthest_failure = matcher.furthest;
    let matched = result.map(|(root, end)| Matched {
        tree: matcher.builder.finish(input, root),
        end,
    });
    Ok(MatchOutcome {
        matched,
        furthest_failure,
    })
}

struct Matcher<'a, T: Tracer> {
    grammar: &'a Grammar,
    input: &'a str,
    builder: TreeBuilder,
    tracer: &'a mut T,
    fuel: u32,
    limits: FuelLimits,
    depth: u32,
    furthest: usize,
    /// Negative lookahead nesting; failures inside it are expected.
    lookahead: u32,
}

type Step = Result<Option<(NodeRef, usize)>, RuntimeError>;

impl<T: Tracer> Matcher<'_, T> {
    fn match_node(&mut self, id: NodeId, pos: usize) -> Step {
        if self.fuel == 0 {
            return Err(RuntimeError::ExecFuelExhausted);
        }
        self.fuel -= 1;
        if self.depth >= self.limits.recursion_limit {
            return Err(RuntimeError::RecursionLimitExceeded);
        }

        self.depth += 1;
        self.tracer.trace_enter(id, pos);
        let checkpoint = self.builder.checkpoint();
        let result = self.match_kind(id, pos);
        self.depth -= 1;

        match &result {
            Ok(Some((_, end))) => self.tracer.trace_success(id, pos, *end),
            Ok(None) => {
                self.builder.truncate(checkpoint);
                self.tracer.trace_failure(id, pos);
            }
            Err(_) => {}
        }
        result
    }

    fn match_kind(&mut self, id: NodeId, pos: usize) -> Step {
        let grammar = self.grammar;
        let node = &grammar[id];

        match node.kind() {
            NodeKind::Literal(text) => {
                if self.input[pos..].starts_with(text.as_str()) {
                    Ok(Some(self.leaf(id, pos, pos + text.len())))
                } else {
                    Ok(self.fail_at(pos))
                }
            }
            NodeKind::CharSet { .. } | NodeKind::CharRange { .. } => {
                match self.input[pos..].chars().next() {
                    Some(c) if node.kind().accepts(c) => {
                        Ok(Some(self.leaf(id, pos, pos + c.len_utf8())))
                    }
                    _ => Ok(self.fail_at(pos)),
                }
            }
            NodeKind::Sequence(children) => {
                let mut at = pos;
                let mut nodes = Vec::with_capacity(children.len());
                for &child in children {
                    let Some((matched, end)) = self.match_node(child, at)? else {
                        return Ok(None);
                    };
                    nodes.push(matched);
                    at = end;
                }
                Ok(Some(self.interior(id, pos, at, nodes)))
            }
            NodeKind::Choice(alternatives) => {
                for (i, &alt) in alternatives.iter().enumerate() {
                    if i > 0 {
                        self.tracer.trace_backtrack(id, pos);
                    }
                    if let Some((matched, end)) = self.match_node(alt, pos)? {
                        self.builder.inherit_name(matched, node.name_handle());
                        return Ok(Some((matched, end)));
                    }
                }
                Ok(None)
            }
            NodeKind::Repeat(child) => {
                let mut at = pos;
                let mut nodes = Vec::new();
                while let Some((matched, end)) = self.match_node(*child, at)? {
                    if end == at {
                        return Err(RuntimeError::NonAdvancingRepeat { position: at });
                    }
                    nodes.push(matched);
                    at = end;
                }
                if nodes.is_empty() {
                    return Ok(None);
                }
                Ok(Some(self.interior(id, pos, at, nodes)))
            }
            NodeKind::Optional(child) => match self.match_node(*child, pos)? {
                Some((matched, end)) => Ok(Some(self.interior(id, pos, end, vec![matched]))),
                None => Ok(Some(self.interior(id, pos, pos, Vec::new()))),
            },
            NodeKind::Negation(child) => {
                let checkpoint = self.builder.checkpoint();
                self.lookahead += 1;
                let inner = self.match_node(*child, pos);
                self.lookahead -= 1;
                self.builder.truncate(checkpoint);
                match inner? {
                    Some(_) => Ok(None),
                    None => Ok(Some(self.leaf(id, pos, pos))),
                }
            }
            NodeKind::EndOfInput => {
                if pos == self.input.len() {
                    Ok(Some(self.leaf(id, pos, pos)))
                } else {
                    Ok(self.fail_at(pos))
                }
            }
            NodeKind::Reference(name) => {
                Err(RuntimeError::UnresolvedReference { name: name.clone() })
            }
        }
    }

    fn leaf(&mut self, id: NodeId, start: usize, end: usize) -> (NodeRef, usize) {
        let name = self.grammar[id].name_handle().cloned();
        let node = self.builder.leaf(id, name, Span::new(start, end));
        (node, end)
    }

    fn interior(
        &mut self,
        id: NodeId,
        start: usize,
        end: usize,
        children: Vec<NodeRef>,
    ) -> (NodeRef, usize) {
        let name = self.grammar[id].name_handle().cloned();
        let node = self
            .builder
            .interior(id, name, Span::new(start, end), children);
        (node, end)
    }

    fn fail_at<R>(&mut self, pos: usize) -> Option<R> {
        if self.lookahead == 0 {
            self.furthest = self.furthest.max(pos);
        }
        None
    }
}
