//! Reading grammars and inputs from files, stdin, or inline text.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("grammar is required: use a positional argument or -g/--grammar")]
    MissingGrammar,

    #[error("input is required: use a positional argument or -s/--source")]
    MissingInput,

    #[error("grammar and input cannot both be read from stdin")]
    StdinTwice,

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Grammar text together with the name diagnostics should show for it.
#[derive(Debug)]
pub struct GrammarSource {
    pub text: String,
    pub origin: Option<String>,
}

pub fn load_grammar(
    path: Option<&Path>,
    text: Option<&str>,
) -> Result<GrammarSource, LoadError> {
    if let Some(text) = text {
        return Ok(GrammarSource {
            text: normalize_lines(text),
            origin: None,
        });
    }
    let path = path.ok_or(LoadError::MissingGrammar)?;
    let (text, origin) = if is_stdin(path) {
        (read_stdin()?, "<stdin>".to_string())
    } else {
        (read_file(path)?, path.display().to_string())
    };
    Ok(GrammarSource {
        text: normalize_lines(&text),
        origin: Some(origin),
    })
}

/// Input is taken verbatim; only the grammar gets its line endings normalized.
pub fn load_input(
    path: Option<&Path>,
    text: Option<&str>,
    grammar_path: Option<&Path>,
) -> Result<String, LoadError> {
    if let Some(text) = text {
        return Ok(text.to_owned());
    }
    let path = path.ok_or(LoadError::MissingInput)?;
    if is_stdin(path) {
        if grammar_path.is_some_and(is_stdin) {
            return Err(LoadError::StdinTwice);
        }
        return read_stdin();
    }
    read_file(path)
}

fn normalize_lines(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join("\n")
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_stdin() -> Result<String, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|source| LoadError::Read {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    Ok(buf)
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}
