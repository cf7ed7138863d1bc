//! ANSI coloring for terminal output.

use std::io::IsTerminal;
use serde::Deserialize;

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn is_enabled(self) -> bool {
        self.resolve(std::io::stdout().is_terminal())
    }

    pub fn is_enabled_for_stderr(self) -> bool {
        self.resolve(std::io::stderr().is_terminal())
    }

    fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            enabled: mode.is_enabled(),
        }
    }

    /// For text written to stderr, which may be redirected independently of stdout.
    pub fn for_stderr(mode: ColorMode) -> Self {
        Self {
            enabled: mode.is_enabled_for_stderr(),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn red(&self, s: &str) -> String {
        self.wrap(s, RED)
    }

    pub fn yellow(&self, s: &str) -> String {
        self.wrap(s, YELLOW)
    }

    pub fn green(&self, s: &str) -> String {
        self.wrap(s, GREEN)
    }

    pub fn info(&self, s: &str) -> String {
        self.wrap(s, BLUE)
    }

    pub fn header(&self, s: &str) -> String {
        self.wrap(s, BOLD)
    }

    pub fn dim(&self, s: &str) -> String {
        self.wrap(s, DIM)
    }

    pub fn wrap(&self, s: &str, code: &str) -> String {
        if self.enabled {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_painter_disabled() {
        let p = Painter::plain();
        assert_eq!(p.red("fake"), "fake");
        assert_eq!(p.green("ok"), "ok");
    }

    #[test]
    fn test_painter_enabled() {
        let p = Painter::new(ColorMode::Always);
        assert!(p.enabled());
        assert_eq!(p.red("fake"), "\x1b[31mfake\x1b[0m");
        assert_eq!(p.yellow("hmm"), "\x1b[33mhmm\x1b[0m");
    }

    #[test]
    fn test_never_mode() {
        assert!(!ColorMode::Never.is_enabled());
        assert!(!ColorMode::Never.is_enabled_for_stderr());
    }

    #[test]
    fn test_auto_follows_the_target_stream() {
        assert!(ColorMode::Auto.resolve(true));
        assert!(!ColorMode::Auto.resolve(false));
        assert!(ColorMode::Always.resolve(false));
        assert_eq!(
            Painter::for_stderr(ColorMode::Auto).enabled(),
            std::io::stderr().is_terminal()
        );
        assert!(!Painter::for_stderr(ColorMode::Never).enabled());
    }
}
