//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for console output
//! - [`MockUI`] for tests
//! - [`CheckenvTheme`] for colors
//!
//! # Example
//!
//! ```
//! use checkenv::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Silent, true);
//! ui.success("Environment is ready");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, CheckenvTheme};

use crate::report::ReportSection;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Write machine-readable output. Never suppressed by the output mode.
    fn output(&mut self, text: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display one section of an evaluation report.
    fn show_section(&mut self, section: &ReportSection);
}
