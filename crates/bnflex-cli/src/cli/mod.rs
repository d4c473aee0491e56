mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{CheckParams, DumpParams, TokenizeParams, TraceParams};

/// Color output mode for CLI commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            // Trees go to stdout and diagnostics to stderr; color only when
            // neither is piped.
            ColorChoice::Auto => {
                std::io::IsTerminal::is_terminal(&std::io::stdout())
                    && std::io::IsTerminal::is_terminal(&std::io::stderr())
            }
        }
    }
}
