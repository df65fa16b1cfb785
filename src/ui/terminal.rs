//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::report::{ReportSection, SectionKind};

use super::{should_use_colors, CheckenvTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Report sections and status go to stdout; warnings and errors go to
/// stderr.
pub struct TerminalUI {
    term: Term,
    err_term: Term,
    theme: CheckenvTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            CheckenvTheme::new()
        } else {
            CheckenvTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn output(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err_term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_section(&mut self, section: &ReportSection) {
        let visible = match section.kind() {
            SectionKind::Missing => self.mode.shows_status(),
            SectionKind::Optional => self.mode.shows_details(),
        };
        if !visible || section.is_empty() {
            return;
        }

        for line in self.theme.format_section(section) {
            writeln!(self.term, "{}", line).ok();
        }
    }
}

/// Create the terminal UI, enabling colors only when allowed.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    let colors = !no_color && should_use_colors();
    Box::new(TerminalUI::new(mode, colors))
}
