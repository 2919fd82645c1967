//! ANSI prefixes for stderr diagnostics. Stdout carries shell code and is
//! never colored.

use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy, Default)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Decide from the flags, `NO_COLOR` and whether stderr is a terminal.
    /// `--no-color` beats `--color`.
    pub fn detect(force_color: bool, no_color: bool) -> Self {
        let enabled = !no_color
            && (force_color
                || (std::env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal()));
        Self::new(enabled)
    }

    fn paint(&self, code: &'static str) -> &'static str {
        if self.enabled {
            code
        } else {
            ""
        }
    }

    pub fn error(&self) -> &'static str {
        self.paint("\x1b[31m")
    }

    pub fn warning(&self) -> &'static str {
        self.paint("\x1b[33m")
    }

    pub fn reset(&self) -> &'static str {
        self.paint("\x1b[0m")
    }
}
