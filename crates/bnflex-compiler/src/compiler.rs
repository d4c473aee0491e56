//! The dialect compiler and its process-wide instance.

use std::path::Path;
use std::sync::LazyLock;

use bnflex_core::utils::{describe_at, line_col};
use bnflex_core::{CullStrategy, NodeFilter, ParseTree};
use bnflex_vm::{FuelLimits, Lexer, TokenizeError};

use crate::bootstrap;
use crate::lower::lower;
use crate::{Error, Result};

static GLOBAL: LazyLock<BnfCompiler> = LazyLock::new(BnfCompiler::new);

/// Compiles dialect text into a [`Lexer`].
///
/// Holds the bootstrap lexer for the dialect. Compiling never touches it
/// mutably, so one instance serves every thread.
#[derive(Clone, Debug)]
pub struct BnfCompiler {
    dialect: Lexer,
}

impl Default for BnfCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl BnfCompiler {
    pub fn new() -> Self {
        let (grammar, root) = bootstrap::dialect();
        let dialect = Lexer::new(grammar, root).expect("dialect grammar is valid");
        Self { dialect }
    }

    /// The shared instance, built on first use.
    pub fn global() -> &'static BnfCompiler {
        &GLOBAL
    }

    /// Bound the work spent parsing dialect text, e.g. for untrusted grammars.
    pub fn with_limits(mut self, limits: FuelLimits) -> Self {
        self.dialect = self.dialect.with_limits(limits);
        self
    }

    /// The bootstrap lexer for the dialect itself.
    pub fn dialect(&self) -> &Lexer {
        &self.dialect
    }

    pub fn compile(&self, source: &str) -> Result<Lexer> {
        let tree = self.parse(source)?;
        let (mut grammar, rules) = lower(tree)?;

        rules.check_aliases(&grammar)?;
        let root = rules.root(&grammar)?;
        rules.link(&mut grammar, root)?;

        Ok(Lexer::new(grammar, root)?)
    }

    /// Read `path` and compile its contents. Line endings are normalized
    /// to `\n`.
    pub fn compile_file(&self, path: impl AsRef<Path>) -> Result<Lexer> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let source = text.lines().collect::<Vec<_>>().join("\n");
        self.compile(&source)
    }

    /// Tokenize `source` with the dialect grammar and strip it down to the
    /// nodes lowering works on.
    pub fn parse(&self, source: &str) -> Result<ParseTree> {
        let mut tree = self
            .dialect
            .tokenize(source)
            .map_err(|err| syntax_error(source, err))?;
        let root = tree.root();
        tree.cull(
            root,
            &[
                NodeFilter::remove_empty(),
                NodeFilter::unnamed(CullStrategy::DeleteAll),
                NodeFilter::by_name(CullStrategy::DeleteAll, ["whitespace", "::=", "comment"]),
                NodeFilter::by_name(CullStrategy::LiftChildren, ["modifiers", "statementList"]),
            ],
        );
        Ok(tree)
    }
}

fn syntax_error(source: &str, err: TokenizeError) -> Error {
    let position = match err {
        TokenizeError::NoMatch { position, .. } | TokenizeError::Incomplete { position, .. } => {
            position
        }
        TokenizeError::Runtime(runtime) => return Error::Runtime(runtime),
    };
    let (line, column) = line_col(source, position);
    Error::Syntax {
        line,
        column,
        position,
        found: describe_at(source, position, 20),
    }
}
