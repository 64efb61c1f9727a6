//! `TerminalReporter`: Presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::ProgressReporter`
//! trait so application services can emit progress events without depending on
//! any presentation type directly.

use std::cell::Cell;
use std::io::Write as _;

use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::OutputContext;

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// - `step()` prints `"  → {message}"` (suppressed when `ctx.quiet`)
/// - `success()` prints `"  ✓ {message}"` (suppressed when `ctx.quiet`)
/// - `warn()` prints `"  ! {message}"` to stderr
/// - `tick()` appends a `.` to the current line (suppressed when `ctx.quiet`)
///
/// Dots stay on one line until any other message or [`finish`](Self::finish)
/// terminates it.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    dots_pending: Cell<bool>,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            dots_pending: Cell::new(false),
        }
    }

    /// End a pending line of dots, if any.
    pub fn finish(&self) {
        if self.dots_pending.replace(false) {
            println!();
        }
    }
}

impl Drop for TerminalReporter<'_> {
    fn drop(&mut self) {
        self.finish();
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        self.finish();
        if !self.ctx.quiet {
            println!("  {} {message}", "→".style(self.ctx.styles.header));
        }
    }

    fn success(&self, message: &str) {
        self.finish();
        if !self.ctx.quiet {
            println!("  {} {message}", "✓".style(self.ctx.styles.success));
        }
    }

    fn warn(&self, message: &str) {
        self.finish();
        eprintln!("  {} {message}", "!".style(self.ctx.styles.warning));
    }

    fn tick(&self) {
        if self.ctx.quiet {
            return;
        }
        let mut out = std::io::stdout().lock();
        if !self.dots_pending.replace(true) {
            let _ = write!(out, "  ");
        }
        let _ = write!(out, ".");
        let _ = out.flush();
    }
}
