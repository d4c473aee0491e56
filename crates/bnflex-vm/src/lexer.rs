use bnflex_core::utils::describe_at;
use bnflex_core::{Grammar, GrammarValidationError, NodeId, ParseTree};

use crate::engine::{FuelLimits, NoopTracer, TokenizeError, Tracer, match_at};

/// Characters of context shown when reporting where input stopped matching.
const CONTEXT_CHARS: usize = 20;

/// A validated grammar graph with a designated root, ready to tokenize input.
///
/// The graph is never mutated after construction, so one `Lexer` can serve
/// concurrent `tokenize` calls from many threads.
#[derive(Clone, Debug)]
pub struct Lexer {
    grammar: Grammar,
    root: NodeId,
    limits: FuelLimits,
}

impl Lexer {
    /// Take ownership of `grammar` after checking that matching from `root`
    /// always terminates.
    pub fn new(grammar: Grammar, root: NodeId) -> Result<Self, GrammarValidationError> {
        grammar.validate(root)?;
        Ok(Self {
            grammar,
            root,
            limits: FuelLimits::default(),
        })
    }

    pub fn with_limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> FuelLimits {
        self.limits
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Match the whole of `input`.
    pub fn tokenize(&self, input: &str) -> Result<ParseTree, TokenizeError> {
        self.tokenize_with(input, &mut NoopTracer)
    }

    pub fn tokenize_with<T: Tracer>(
        &self,
        input: &str,
        tracer: &mut T,
    ) -> Result<ParseTree, TokenizeError> {
        let outcome = match_at(&self.grammar, self.root, input, 0, self.limits, tracer)?;
        match outcome.matched {
            None => {
                let position = outcome.furthest_failure;
                Err(TokenizeError::NoMatch {
                    position,
                    found: describe_at(input, position, CONTEXT_CHARS),
                })
            }
            Some(m) if m.end < input.len() => {
                let position = outcome.furthest_failure.max(m.end);
                Err(TokenizeError::Incomplete {
                    consumed: m.end,
                    position,
                    found: describe_at(input, position, CONTEXT_CHARS),
                })
            }
            Some(m) => Ok(m.tree),
        }
    }
}
