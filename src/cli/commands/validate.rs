//! Validate command implementation.
//!
//! The `checkenv validate` command checks the specification file against
//! the schema and reports every violation, without touching the
//! environment.

use std::path::{Path, PathBuf};

use crate::cli::args::ValidateArgs;
use crate::error::Result;
use crate::spec::{collect_violations, load_spec_value, Specification};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::show_load_error;

/// Exit code for a specification that violates the schema.
const INVALID_SPEC_EXIT_CODE: i32 = 3;

/// The validate command implementation.
pub struct ValidateCommand {
    spec_path: PathBuf,
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(spec_path: &Path, args: ValidateArgs) -> Self {
        Self {
            spec_path: spec_path.to_path_buf(),
            args,
        }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let document = match load_spec_value(&self.spec_path) {
            Ok(value) => value,
            Err(e) => return Ok(show_load_error(ui, &e, &self.spec_path)),
        };

        let violations = collect_violations(&document);

        if self.args.json {
            let json = serde_json::to_string_pretty(&violations).map_err(anyhow::Error::from)?;
            ui.output(&json);
        } else if violations.is_empty() {
            let spec = Specification::from_document(document)?;
            ui.success(&format!(
                "{} is valid ({} variables declared)",
                self.spec_path.display(),
                spec.len()
            ));
        } else {
            for violation in &violations {
                ui.error(&format!("[{}] {}", violation.rule, violation.message));
            }
        }

        if violations.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(INVALID_SPEC_EXIT_CODE))
        }
    }
}
