//! User-facing error rendering with source excerpts.

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use crate::engine::TokenizeError;

/// A single error pointing at a byte range of some source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
    start: usize,
    end: usize,
    label: String,
}

impl Diagnostic {
    pub fn error(start: usize, end: usize, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            label: message.clone(),
            message,
            start,
            end,
        }
    }

    /// Text placed under the caret, when it should differ from the title.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn render(&self, source: &str, path: Option<&str>, colored: bool) -> String {
        let renderer = if colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let start = self.start.min(source.len());
        let end = if self.end > start {
            self.end.min(source.len())
        } else {
            // Widen an empty span to the character under it.
            source[start..]
                .chars()
                .next()
                .map_or(start, |c| start + c.len_utf8())
        };

        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(start..end).label(&self.label));
        if let Some(p) = path {
            snippet = snippet.path(p);
        }

        let report = vec![Level::ERROR.primary_title(&self.message).element(snippet)];
        renderer.render(&report).to_string()
    }
}

impl From<&TokenizeError> for Diagnostic {
    fn from(err: &TokenizeError) -> Self {
        match err {
            TokenizeError::NoMatch { position, found } => {
                Diagnostic::error(*position, *position, "input does not match the grammar")
                    .with_label(format!("unexpected {found}"))
            }
            TokenizeError::Incomplete {
                position, found, ..
            } => Diagnostic::error(*position, *position, "input not fully consumed")
                .with_label(format!("unexpected {found}")),
            TokenizeError::Runtime(runtime) => {
                let at = err.position().unwrap_or(0);
                Diagnostic::error(at, at, runtime.to_string()).with_label("matching stopped here")
            }
        }
    }
}
