//! Render a grammar graph back into BNF dialect text.
//!
//! Every named node reachable from the root becomes its own `name ::= ...`
//! line, in discovery order; anything unnamed is printed inline. Names that
//! start with `'` label literals and are always inlined.

use std::collections::VecDeque;
use std::fmt::Write as _;

use indexmap::IndexSet;

use super::node::{Grammar, NodeId, NodeKind};
use crate::utils::escape_text;

const CHOICE: u8 = 0;
const SEQUENCE: u8 = 1;
const UNARY: u8 = 2;
const ATOM: u8 = 3;

impl Grammar {
    pub fn dump(&self, root: NodeId) -> String {
        let mut queue = VecDeque::from([root]);
        let mut emitted = IndexSet::new();
        let mut out = String::new();

        while let Some(id) = queue.pop_front() {
            if !emitted.insert(id) {
                continue;
            }
            let name = self[id].name().unwrap_or("<anonymous>");
            let (body, _) = self.render(id, true, &mut queue);
            writeln!(out, "{name} ::= {body}").expect("String write never fails");
        }
        out
    }

    fn render(&self, id: NodeId, top: bool, queue: &mut VecDeque<NodeId>) -> (String, u8) {
        let node = &self[id];
        if !top && let Some(name) = node.name().filter(|n| !n.starts_with('\'')) {
            queue.push_back(id);
            return (name.to_string(), ATOM);
        }

        match node.kind() {
            NodeKind::Literal(text) => (format!("\"{}\"", escape_text(text)), ATOM),
            NodeKind::CharSet { chars, negate } => {
                let members: String = chars.iter().map(|&c| escape_class_char(c)).collect();
                (format!("[{}{members}]", caret(*negate)), ATOM)
            }
            NodeKind::CharRange { lo, hi, negate } => (
                format!(
                    "[{}{}-{}]",
                    caret(*negate),
                    escape_class_char(*lo),
                    escape_class_char(*hi)
                ),
                ATOM,
            ),
            NodeKind::Sequence(children) => {
                let parts: Vec<String> = children
                    .iter()
                    .map(|&c| self.render_at(c, UNARY, queue))
                    .collect();
                (parts.join(" "), SEQUENCE)
            }
            NodeKind::Choice(alts) => {
                let parts: Vec<String> = alts
                    .iter()
                    .map(|&c| self.render_at(c, SEQUENCE, queue))
                    .collect();
                (parts.join(" | "), CHOICE)
            }
            NodeKind::Optional(child) => match self[*child].kind() {
                NodeKind::Repeat(inner) if self[*child].name().is_none() => {
                    (format!("{}*", self.render_at(*inner, ATOM, queue)), UNARY)
                }
                _ => (format!("{}?", self.render_at(*child, ATOM, queue)), UNARY),
            },
            NodeKind::Repeat(child) => (format!("{}+", self.render_at(*child, ATOM, queue)), UNARY),
            NodeKind::Negation(child) => (format!("!{}", self.render_at(*child, ATOM, queue)), UNARY),
            NodeKind::EndOfInput => ("EOF".to_string(), ATOM),
            NodeKind::Reference(name) => (name.clone(), ATOM),
        }
    }

    fn render_at(&self, id: NodeId, min_prec: u8, queue: &mut VecDeque<NodeId>) -> String {
        let (text, prec) = self.render(id, false, queue);
        if prec < min_prec { format!("({text})") } else { text }
    }
}

fn caret(negate: bool) -> &'static str {
    if negate { "^" } else { "" }
}

fn escape_class_char(c: char) -> String {
    match c {
        ']' | '\\' | '-' | '^' => format!("\\{c}"),
        '\n' => "\\n".to_string(),
        '\t' => "\\t".to_string(),
        '\r' => "\\r".to_string(),
        c => c.to_string(),
    }
}
