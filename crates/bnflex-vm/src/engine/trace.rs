//! Tracing infrastructure for debugging matcher execution.
//!
//! `NoopTracer` has `#[inline(always)]` empty methods, so an untraced match
//! compiles down to the bare matcher. `PrintTracer` records one line per
//! visited node and patches the outcome onto that line when the node
//! finishes, which keeps the output in pre-order.

use bnflex_core::utils::escape_text;
use bnflex_core::{Colors, Grammar, NodeId, NodeKind};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Named nodes only, no matched text.
    #[default]
    Default,
    /// Every node, with matched text and choice backtracking.
    Verbose,
    /// Every node, with the upcoming input shown on entry.
    VeryVerbose,
}

/// Matcher instrumentation.
///
/// Calls are strictly nested: every `trace_enter` is closed by exactly one
/// `trace_success` or `trace_failure` for the same node, unless matching
/// aborts with a runtime error.
pub trait Tracer {
    /// Before a node is tried at `position`.
    fn trace_enter(&mut self, node: NodeId, position: usize);

    /// After a node matched `start..end`.
    fn trace_success(&mut self, node: NodeId, start: usize, end: usize);

    /// After a node failed at `position`.
    fn trace_failure(&mut self, node: NodeId, position: usize);

    /// When a choice moves on to its next alternative.
    fn trace_backtrack(&mut self, choice: NodeId, position: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _node: NodeId, _position: usize) {}

    #[inline(always)]
    fn trace_success(&mut self, _node: NodeId, _start: usize, _end: usize) {}

    #[inline(always)]
    fn trace_failure(&mut self, _node: NodeId, _position: usize) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _choice: NodeId, _position: usize) {}
}

/// Tracer that collects an indented execution log.
pub struct PrintTracer<'a> {
    source: &'a str,
    grammar: &'a Grammar,
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
    /// Line index for each open node, `None` when the node is hidden.
    open: Vec<Option<usize>>,
}

pub struct PrintTracerBuilder<'a> {
    source: &'a str,
    grammar: &'a Grammar,
    verbosity: Verbosity,
    colored: bool,
}

impl<'a> PrintTracerBuilder<'a> {
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn build(self) -> PrintTracer<'a> {
        PrintTracer {
            source: self.source,
            grammar: self.grammar,
            verbosity: self.verbosity,
            colors: Colors::new(self.colored),
            lines: Vec::new(),
            open: Vec::new(),
        }
    }
}

impl<'a> PrintTracer<'a> {
    pub fn builder(source: &'a str, grammar: &'a Grammar) -> PrintTracerBuilder<'a> {
        PrintTracerBuilder {
            source,
            grammar,
            verbosity: Verbosity::Default,
            colored: false,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All trace lines joined, newline-terminated.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn visible(&self, node: NodeId) -> bool {
        self.verbosity > Verbosity::Default || self.grammar[node].name().is_some()
    }

    fn indent(&self) -> String {
        "  ".repeat(self.open.iter().filter(|o| o.is_some()).count())
    }

    fn label(&self, node: NodeId) -> String {
        let n = &self.grammar[node];
        let c = self.colors;
        match (n.name(), n.kind()) {
            (Some(name), _) => format!("{}{name}{}", c.name, c.reset),
            (None, NodeKind::Literal(text)) => {
                format!("{}\"{}\"{}", c.text, escape_text(text), c.reset)
            }
            (None, kind) => format!("{}{}{}", c.dim, kind.label(), c.reset),
        }
    }

    fn snippet(&self, start: usize, end: usize) -> String {
        let text: String = self.source[start..end].chars().take(40).collect();
        let c = self.colors;
        format!(" {}\"{}\"{}", c.text, escape_text(&text), c.reset)
    }

    fn close(&mut self, suffix: String) {
        if let Some(Some(line)) = self.open.pop() {
            self.lines[line].push_str(&suffix);
        }
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_enter(&mut self, node: NodeId, position: usize) {
        if !self.visible(node) {
            self.open.push(None);
            return;
        }
        let mut line = format!("{}{} @{position}", self.indent(), self.label(node));
        if self.verbosity == Verbosity::VeryVerbose {
            let ahead = self.source[position..]
                .char_indices()
                .nth(12)
                .map_or(self.source.len(), |(i, _)| position + i);
            let c = self.colors;
            line.push_str(&format!(" {}»{}", c.dim, c.reset));
            line.push_str(&self.snippet(position, ahead));
        }
        self.lines.push(line);
        self.open.push(Some(self.lines.len() - 1));
    }

    fn trace_success(&mut self, _node: NodeId, start: usize, end: usize) {
        let mut suffix = format!(" -> {end}");
        if self.verbosity >= Verbosity::Verbose && end > start {
            suffix.push_str(&self.snippet(start, end));
        }
        self.close(suffix);
    }

    fn trace_failure(&mut self, _node: NodeId, _position: usize) {
        let c = self.colors;
        self.close(format!(" {}failed{}", c.dim, c.reset));
    }

    fn trace_backtrack(&mut self, choice: NodeId, position: usize) {
        if self.verbosity < Verbosity::Verbose {
            return;
        }
        let c = self.colors;
        let line = format!(
            "{}{}backtrack {} @{position}{}",
            self.indent(),
            c.dim,
            self.label(choice),
            c.reset
        );
        self.lines.push(line);
    }
}
