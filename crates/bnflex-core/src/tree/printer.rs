//! Indented text rendering of a parse tree.

use std::fmt::Write;

use super::{NodeRef, ParseTree};
use crate::Colors;
use crate::utils::escape_text;

pub struct TreePrinter<'t> {
    tree: &'t ParseTree,
    start: NodeRef,
    spans: bool,
    values: bool,
    colors: Colors,
}

impl<'t> TreePrinter<'t> {
    pub fn new(tree: &'t ParseTree) -> Self {
        Self {
            tree,
            start: tree.root(),
            spans: false,
            values: true,
            colors: Colors::OFF,
        }
    }

    /// Print the subtree under `node` instead of the whole tree.
    pub fn from_node(mut self, node: NodeRef) -> Self {
        self.start = node;
        self
    }

    pub fn with_spans(mut self, spans: bool) -> Self {
        self.spans = spans;
        self
    }

    /// Show leaf values (on by default).
    pub fn with_values(mut self, values: bool) -> Self {
        self.values = values;
        self
    }

    pub fn colored(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let mut stack = vec![(self.start, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            self.format_node(node, depth, w)?;
            for &child in self.tree.children(node).iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        Ok(())
    }

    fn format_node(&self, node: NodeRef, depth: usize, w: &mut impl Write) -> std::fmt::Result {
        let c = self.colors;
        let indent = "  ".repeat(depth);
        let name = self.tree.name(node).unwrap_or("_");
        write!(w, "{indent}{}{name}{}", c.name, c.reset)?;
        if self.spans {
            let span = self.tree.span(node);
            write!(w, " {}[{}..{}]{}", c.dim, span.start, span.end, c.reset)?;
        }
        if self.values && self.tree.is_leaf(node) {
            let value = escape_text(self.tree.value(node));
            write!(w, " {}\"{value}\"{}", c.text, c.reset)?;
        }
        writeln!(w)
    }
}
