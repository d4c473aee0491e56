//! Lowering of the culled dialect parse tree into a grammar graph.
//!
//! Passes run in a fixed order over one private tree:
//! 1. escapes: blank each `\` marker and translate the escaped character
//! 2. flattening: splice every `statementOpt` wrapper into its statement
//! 3. atoms: every `token` becomes a grammar node, stored as the token's payload
//! 4. rules: per `sentence`, groups are folded leaf-first, then the body
//!
//! Rule references stay `Reference` nodes here; `analyze` links them.

use bnflex_core::utils::{describe_at, line_col};
use bnflex_core::{CullStrategy, Grammar, NodeFilter, NodeId, NodeRef, ParseTree, TraversalOrder};
use indexmap::IndexMap;

use crate::analyze::RuleTable;
use crate::{Error, Result};

/// Names of the nodes the passes work on, gathered in one traversal.
const PASS_TARGETS: &[&str] = &["escapeSequence", "statementOpt", "token", "sentence"];

pub(crate) fn lower(tree: ParseTree) -> Result<(Grammar, RuleTable)> {
    let mut lowering = Lowering {
        tree,
        grammar: Grammar::new(),
        references: IndexMap::new(),
        rules: RuleTable::new(),
    };
    lowering.run()?;
    Ok((lowering.grammar, lowering.rules))
}

struct Lowering {
    tree: ParseTree,
    grammar: Grammar,
    /// One shared `Reference` node per rule name.
    references: IndexMap<String, NodeId>,
    rules: RuleTable,
}

impl Lowering {
    fn run(&mut self) -> Result<()> {
        let root = self.tree.root();
        let mut targets = self
            .tree
            .all_by_names(root, TraversalOrder::LeafFirst, PASS_TARGETS);
        let mut take = |name: &str| targets.swap_remove(name).unwrap_or_default();
        let (escapes, flattens, tokens, sentences) = (
            take("escapeSequence"),
            take("statementOpt"),
            take("token"),
            take("sentence"),
        );

        for escape in escapes {
            self.resolve_escape(escape);
        }
        for opt in flattens {
            if let Some(&first) = self.tree.children(opt).first() {
                self.tree.lift_children(first);
            }
            self.tree.lift_children(opt);
        }
        for token in tokens {
            let node = self.lower_token(token)?;
            self.tree.replace_with(token, node);
        }
        for sentence in sentences {
            self.lower_sentence(sentence)?;
        }
        Ok(())
    }

    fn resolve_escape(&mut self, sequence: NodeRef) {
        if let Some(marker) = self.tree.child_by_name(sequence, "escape") {
            self.tree.set_value(marker, "");
        }
        let Some(escaped) = self.tree.child_by_name(sequence, "anyChar") else {
            return;
        };
        let translated = match self.tree.value(escaped) {
            "n" => "\n",
            "t" => "\t",
            "r" => "\r",
            _ => return,
        };
        self.tree.set_value(escaped, translated);
    }

    fn lower_token(&mut self, token: NodeRef) -> Result<NodeId> {
        let atom = self
            .tree
            .children(token)
            .iter()
            .copied()
            .find(|&c| {
                matches!(
                    self.tree.name(c),
                    Some("string" | "charset" | "chargroup" | "eof" | "word")
                )
            })
            .ok_or_else(|| self.malformed(token))?;

        let node = match self.tree.name(atom) {
            Some("string") => self.lower_string(atom),
            Some("charset") => self.lower_charset(atom),
            Some("chargroup") => self.lower_chargroup(atom)?,
            Some("eof") => self.grammar.end_of_input(),
            _ => self.reference(atom),
        };
        Ok(self.apply_modifiers(node, token))
    }

    fn lower_string(&mut self, string: NodeRef) -> NodeId {
        let text = self
            .tree
            .child_by_name(string, "strOpt")
            .map(|body| self.tree.join_leaves(body, ""))
            .unwrap_or_default();
        if text.is_empty() {
            return self.grammar.literal(text);
        }
        // Literals keep a name of their own so they stay visible in trees.
        let name = format!("'{text}");
        let literal = self.grammar.literal(text);
        self.grammar.named(literal, &name)
    }

    fn lower_charset(&mut self, charset: NodeRef) -> NodeId {
        let negate = self.tree.child_by_name(charset, "^").is_some();
        let chars = self
            .tree
            .child_by_name(charset, "setOpt")
            .map(|body| self.tree.join_leaves(body, ""))
            .unwrap_or_default();
        self.grammar.char_set(&chars, negate)
    }

    fn lower_chargroup(&mut self, group: NodeRef) -> Result<NodeId> {
        let negate = self.tree.child_by_name(group, "^").is_some();
        let bound = |name: &str| {
            self.tree
                .child_by_name(group, name)
                .and_then(|b| self.tree.join_leaves(b, "").chars().next())
        };
        let (Some(lo), Some(hi)) = (bound("rangeStart"), bound("rangeEnd")) else {
            return Err(self.malformed(group));
        };
        if lo > hi {
            return Err(Error::InvalidRange { start: lo, end: hi });
        }
        Ok(self.grammar.char_range(lo, hi, negate))
    }

    fn reference(&mut self, word: NodeRef) -> NodeId {
        let name = self.tree.value(word);
        if let Some(&id) = self.references.get(name) {
            return id;
        }
        let id = self.grammar.reference(name);
        self.references.insert(name.to_string(), id);
        id
    }

    /// Wrap `node` per the `modifier` and `!` children of `site`. The
    /// modifier binds tighter: `!x+` is `!(x+)`.
    fn apply_modifiers(&mut self, node: NodeId, site: NodeRef) -> NodeId {
        let mut node = node;
        if let Some(modifier) = self.tree.child_by_name(site, "modifier") {
            node = match self.tree.value(modifier) {
                "+" => self.grammar.repeat(node),
                "*" => {
                    let many = self.grammar.repeat(node);
                    self.grammar.optional(many)
                }
                "?" => self.grammar.optional(node),
                _ => node,
            };
        }
        if self.tree.child_by_name(site, "!").is_some() {
            node = self.grammar.negation(node);
        }
        node
    }

    fn lower_sentence(&mut self, sentence: NodeRef) -> Result<()> {
        let name = self
            .tree
            .child_by_name(sentence, "word")
            .map(|w| self.tree.value(w).to_string())
            .ok_or_else(|| self.malformed(sentence))?;

        for group in self
            .tree
            .all_by_name(sentence, TraversalOrder::LeafFirst, "nested")
        {
            let statement = self
                .tree
                .child_by_name(group, "statement")
                .ok_or_else(|| self.malformed(group))?;
            let body = self.fold(statement)?;
            let node = self.apply_modifiers(body, group);
            self.tree.replace_with(group, node);
        }

        let statement = self
            .tree
            .child_by_name(sentence, "statement")
            .ok_or_else(|| self.malformed(sentence))?;
        let body = self.fold(statement)?;
        // An alias stays a bare reference so its chain can be followed later.
        let body = if self.grammar[body].kind().is_reference() {
            body
        } else {
            self.grammar.named(body, &name)
        };
        self.rules.define(name, body)
    }

    /// Alternatives split on `|`; each is one element or a sequence.
    fn fold(&mut self, statement: NodeRef) -> Result<NodeId> {
        self.tree.cull(
            statement,
            &[NodeFilter::by_name(CullStrategy::LiftChildren, ["statement"])],
        );

        let mut alternatives = Vec::new();
        for group in self.tree.split_children(statement, "|") {
            let elements = group
                .into_iter()
                .map(|e| self.tree.payload(e).ok_or_else(|| self.malformed(e)))
                .collect::<Result<Vec<_>>>()?;
            let alternative = match elements.as_slice() {
                [single] => *single,
                _ => self.grammar.sequence(elements),
            };
            alternatives.push(alternative);
        }

        Ok(match alternatives.as_slice() {
            [single] => *single,
            _ => self.grammar.choice(alternatives),
        })
    }

    /// The bootstrap grammar guarantees the shapes the passes rely on; a
    /// node that breaks them is reported against its source text.
    fn malformed(&self, node: NodeRef) -> Error {
        let source = self.tree.source();
        let position = self.tree.span(node).start;
        let (line, column) = line_col(source, position);
        Error::Syntax {
            line,
            column,
            position,
            found: describe_at(source, position, 20),
        }
    }
}
