//! ANSI color codes for terminal output.
//!
//! Roles rather than hues:
//! - `name`: node and rule names (blue)
//! - `text`: matched text and literals (green)
//! - `dim`: spans, structure, trace metadata

/// ANSI palette for CLI output. Standard 16-color codes only.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub name: &'static str,
    pub text: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        name: "\x1b[34m",
        text: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        name: "",
        text: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
