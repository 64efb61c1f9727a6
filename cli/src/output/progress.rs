//! Progress indicators using indicatif

#![allow(clippy::expect_used)] // Templates are compile-time constants

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::application::ports::ProgressReporter;

/// Create a spinner for indeterminate progress.
///
/// # Panics
///
/// Panics if the spinner template string is invalid (it is a compile-time constant and will not panic).
#[must_use]
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"])
            .template("  {spinner:.cyan} {msg}")
            .expect("valid template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Finish a spinner with a checkmark on the left.
pub fn finish_ok(pb: &ProgressBar, msg: &str) {
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {prefix} {msg}")
            .expect("valid template"),
    );
    pb.set_prefix("✓");
    pb.finish_with_message(msg.to_string());
}

/// `ProgressReporter` that drives a spinner instead of printing dots.
///
/// Used on interactive terminals where a steady spinner reads better than a
/// growing line of dots.
pub struct SpinnerReporter {
    pb: ProgressBar,
}

impl SpinnerReporter {
    #[must_use]
    pub fn new(msg: &str) -> Self {
        Self { pb: spinner(msg) }
    }

    /// Clear the spinner without a final message.
    pub fn clear(&self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}

impl Drop for SpinnerReporter {
    fn drop(&mut self) {
        self.clear();
    }
}

impl ProgressReporter for SpinnerReporter {
    fn step(&self, message: &str) {
        self.pb.set_message(message.to_string());
    }

    fn success(&self, message: &str) {
        finish_ok(&self.pb, message);
    }

    fn warn(&self, message: &str) {
        self.pb.suspend(|| eprintln!("  ! {message}"));
    }

    fn tick(&self) {
        self.pb.tick();
    }
}
