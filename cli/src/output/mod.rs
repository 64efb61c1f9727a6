//! Terminal output: palette, one-line notices, renderers and progress.
//!
//! Notices go to stdout, except warnings and errors which go to stderr so
//! they never interleave with audit lines or tables. `--quiet` silences
//! everything but errors.

pub mod human;
pub mod progress;
pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::{OwoColorize as _, Style};
pub use human::{AuditPrinter, HumanRenderer};
pub use reporter::TerminalReporter;
pub use styles::Styles;

/// Colour is used only on a terminal, and never with `--no-color` or
/// `NO_COLOR` set.
#[must_use]
pub fn colors_enabled(no_color_flag: bool, is_tty: bool, no_color_env: bool) -> bool {
    is_tty && !no_color_flag && !no_color_env
}

#[derive(Clone, Copy)]
enum Notice {
    Success,
    Warning,
    Error,
    Info,
}

impl Notice {
    fn glyph(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✗",
            Self::Info => "ℹ",
        }
    }

    fn style(self, styles: &Styles) -> Style {
        match self {
            Self::Success => styles.success,
            Self::Warning => styles.warning,
            Self::Error => styles.error,
            Self::Info => styles.info,
        }
    }
}

/// Palette and terminal state shared by every command.
pub struct OutputContext {
    pub styles: Styles,
    /// stdout is a terminal.
    pub is_tty: bool,
    pub quiet: bool,
}

impl OutputContext {
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let colored = colors_enabled(no_color, is_tty, std::env::var_os("NO_COLOR").is_some());
        Self {
            styles: if colored { Styles::colored() } else { Styles::default() },
            is_tty,
            quiet,
        }
    }

    /// Spinners are drawn only on an interactive, non-quiet terminal.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    fn notice(&self, kind: Notice, msg: &str) {
        let line = format!("  {} {msg}", kind.glyph().style(kind.style(&self.styles)));
        match kind {
            Notice::Error => eprintln!("{line}"),
            _ if self.quiet => {}
            Notice::Warning => eprintln!("{line}"),
            Notice::Success | Notice::Info => println!("{line}"),
        }
    }

    pub fn success(&self, msg: &str) {
        self.notice(Notice::Success, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.notice(Notice::Warning, msg);
    }

    /// Printed even with `--quiet`.
    pub fn error(&self, msg: &str) {
        self.notice(Notice::Error, msg);
    }

    pub fn info(&self, msg: &str) {
        self.notice(Notice::Info, msg);
    }

    /// Section title above a block of `kv` rows.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// One `label  value` row of sandbox details.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.label));
        }
    }
}
