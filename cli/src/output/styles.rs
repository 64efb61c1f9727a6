//! Colour palette for terminal output.

use owo_colors::Style;

use crate::domain::Verdict;

/// One style per kind of line irons prints. The default palette is plain.
#[derive(Default, Clone, Copy)]
pub struct Styles {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub info: Style,
    /// Field labels in `key  value` rows.
    pub label: Style,
    pub header: Style,
}

impl Styles {
    /// Palette for a colour terminal.
    #[must_use]
    pub fn colored() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            info: Style::new().blue(),
            label: Style::new().dimmed(),
            header: Style::new().bold().cyan(),
        }
    }

    /// Style of an audit verdict label: green, yellow or red.
    #[must_use]
    pub fn verdict(&self, verdict: Verdict) -> Style {
        match verdict {
            Verdict::Allowed => self.success,
            Verdict::Warn => self.warning,
            Verdict::Blocked => self.error,
        }
    }
}
