use std::ops::Index;
use std::sync::Arc;

use indexmap::IndexSet;

/// Stable index of a node inside a [`Grammar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a grammar node matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Exact text.
    Literal(String),
    /// One character: membership XOR `negate`. An empty negated set matches any character.
    CharSet { chars: IndexSet<char>, negate: bool },
    /// One character: `lo..=hi` XOR `negate`.
    CharRange { lo: char, hi: char, negate: bool },
    /// All children in order, atomically.
    Sequence(Vec<NodeId>),
    /// First alternative that matches.
    Choice(Vec<NodeId>),
    /// Child, greedily, at least once.
    Repeat(NodeId),
    /// Child zero or one time.
    Optional(NodeId),
    /// Zero-width: succeeds iff the child fails here.
    Negation(NodeId),
    /// Zero-width: succeeds only at the end of input.
    EndOfInput,
    /// Unresolved link to a named rule.
    Reference(String),
}

impl NodeKind {
    /// Single-character membership test for `CharSet` and `CharRange`.
    ///
    /// Other kinds never accept a character.
    pub fn accepts(&self, c: char) -> bool {
        match self {
            NodeKind::CharSet { chars, negate } => chars.contains(&c) != *negate,
            NodeKind::CharRange { lo, hi, negate } => (*lo..=*hi).contains(&c) != *negate,
            _ => false,
        }
    }

    pub fn children(&self) -> &[NodeId] {
        match self {
            NodeKind::Sequence(children) | NodeKind::Choice(children) => children,
            NodeKind::Repeat(child) | NodeKind::Optional(child) | NodeKind::Negation(child) => {
                std::slice::from_ref(child)
            }
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> &mut [NodeId] {
        match self {
            NodeKind::Sequence(children) | NodeKind::Choice(children) => children,
            NodeKind::Repeat(child) | NodeKind::Optional(child) | NodeKind::Negation(child) => {
                std::slice::from_mut(child)
            }
            _ => &mut [],
        }
    }

    /// Short variant label used by dumps and traces.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Literal(_) => "Literal",
            NodeKind::CharSet { .. } => "CharSet",
            NodeKind::CharRange { .. } => "CharRange",
            NodeKind::Sequence(_) => "Sequence",
            NodeKind::Choice(_) => "Choice",
            NodeKind::Repeat(_) => "Repeat",
            NodeKind::Optional(_) => "Optional",
            NodeKind::Negation(_) => "Negation",
            NodeKind::EndOfInput => "EndOfInput",
            NodeKind::Reference(_) => "Reference",
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, NodeKind::Reference(_))
    }
}

/// One node of the matching graph: a kind plus an optional label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrammarNode {
    name: Option<Arc<str>>,
    kind: NodeKind,
}

impl GrammarNode {
    pub fn new(kind: NodeKind) -> Self {
        Self { name: None, kind }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Shared handle to the name, cloned into every parse node this produces.
    pub fn name_handle(&self) -> Option<&Arc<str>> {
        self.name.as_ref()
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn children(&self) -> &[NodeId] {
        self.kind.children()
    }
}

/// Arena owning every node of a grammar graph.
#[derive(Clone, Debug, Default)]
pub struct Grammar {
    nodes: Vec<GrammarNode>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(GrammarNode::new(kind));
        id
    }

    pub fn literal(&mut self, text: impl Into<String>) -> NodeId {
        self.add(NodeKind::Literal(text.into()))
    }

    pub fn char_set(&mut self, chars: &str, negate: bool) -> NodeId {
        self.add(NodeKind::CharSet {
            chars: chars.chars().collect(),
            negate,
        })
    }

    pub fn char_range(&mut self, lo: char, hi: char, negate: bool) -> NodeId {
        self.add(NodeKind::CharRange { lo, hi, negate })
    }

    pub fn sequence(&mut self, children: impl IntoIterator<Item = NodeId>) -> NodeId {
        self.add(NodeKind::Sequence(children.into_iter().collect()))
    }

    pub fn choice(&mut self, alternatives: impl IntoIterator<Item = NodeId>) -> NodeId {
        self.add(NodeKind::Choice(alternatives.into_iter().collect()))
    }

    pub fn repeat(&mut self, child: NodeId) -> NodeId {
        self.add(NodeKind::Repeat(child))
    }

    pub fn optional(&mut self, child: NodeId) -> NodeId {
        self.add(NodeKind::Optional(child))
    }

    pub fn negation(&mut self, child: NodeId) -> NodeId {
        self.add(NodeKind::Negation(child))
    }

    pub fn end_of_input(&mut self) -> NodeId {
        self.add(NodeKind::EndOfInput)
    }

    pub fn reference(&mut self, name: impl Into<String>) -> NodeId {
        self.add(NodeKind::Reference(name.into()))
    }

    /// Label `id` and hand it back, so construction can be chained.
    pub fn named(&mut self, id: NodeId, name: &str) -> NodeId {
        self.nodes[id.index()].name = Some(Arc::from(name));
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&GrammarNode> {
        self.nodes.get(id.index())
    }

    /// Mutable child edges of `id`, for rewriting references in place.
    pub fn children_mut(&mut self, id: NodeId) -> &mut [NodeId] {
        self.nodes[id.index()].kind.children_mut()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node reachable from `root`, in depth-first pre-order, each once.
    pub fn reachable(&self, root: NodeId) -> Vec<NodeId> {
        let mut seen = vec![false; self.nodes.len()];
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id.index()], true) {
                continue;
            }
            order.push(id);
            stack.extend(self[id].children().iter().rev().copied());
        }
        order
    }
}

impl Index<NodeId> for Grammar {
    type Output = GrammarNode;

    fn index(&self, id: NodeId) -> &GrammarNode {
        &self.nodes[id.index()]
    }
}
