//! Check command implementation.
//!
//! The `checkenv check` command loads the specification, applies it to the
//! process environment and prints the report.

use std::path::{Path, PathBuf};

use crate::check::{check, CheckOptions};
use crate::cli::args::{CheckArgs, ReportFormat};
use crate::error::Result;
use crate::report::JsonReport;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{show_load_error, show_report};

/// The check command implementation.
pub struct CheckCommand {
    spec_path: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(spec_path: &Path, args: CheckArgs) -> Self {
        Self {
            spec_path: spec_path.to_path_buf(),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = match check(&CheckOptions::new(&self.spec_path)) {
            Ok(outcome) => outcome,
            Err(e) => return Ok(show_load_error(ui, &e, &self.spec_path)),
        };

        match self.args.format {
            ReportFormat::Json => {
                let json = serde_json::to_string_pretty(&JsonReport::new(&outcome.evaluation))
                    .map_err(anyhow::Error::from)?;
                ui.output(&json);
            }
            ReportFormat::Human => {
                show_report(ui, &outcome.report());
                if !outcome.failed() {
                    ui.success(&format!(
                        "All required environment variables are set ({} declared)",
                        outcome.specification.len()
                    ));
                }
            }
        }

        if outcome.failed() {
            Ok(CommandResult::failure(outcome.exit_code()))
        } else {
            Ok(CommandResult::success())
        }
    }
}
