//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Status lines are suppressed in quiet mode; errors are always shown.
pub(crate) struct Output {
    term: Term,
    quiet: bool,
    green: Style,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new(quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            quiet,
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    fn write(&self, msg: &str) {
        if !self.quiet {
            let _ = self.term.write_line(msg);
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        self.write(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        self.write(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        self.write(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red), even in quiet mode.
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a highlighted message (cyan bold).
    pub(crate) fn highlight(&self, msg: &str) {
        self.write(&self.cyan_bold.apply_to(msg).to_string());
    }
}
