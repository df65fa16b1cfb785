//! List command implementation.
//!
//! The `checkenv list` command prints every declared variable with its
//! resolved rule.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::report::ReportRow;
use crate::spec::{load_spec_file, Rule};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::show_load_error;

/// The list command implementation.
pub struct ListCommand {
    spec_path: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(spec_path: &Path, args: ListArgs) -> Self {
        Self {
            spec_path: spec_path.to_path_buf(),
            args,
        }
    }
}

/// Short policy label for a rule.
fn policy_label(rule: &Rule) -> &'static str {
    let resolved = rule.resolve();
    if resolved.default.as_ref().is_some_and(|d| d.is_applicable()) {
        "default"
    } else if resolved.required {
        "required"
    } else {
        "optional"
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let spec = match load_spec_file(&self.spec_path) {
            Ok(spec) => spec,
            Err(e) => return Ok(show_load_error(ui, &e, &self.spec_path)),
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&spec).map_err(anyhow::Error::from)?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        if spec.is_empty() {
            ui.warning("No variables declared");
            return Ok(CommandResult::success());
        }

        for (name, rule) in spec.iter() {
            let row = ReportRow::from_spec(name, &spec);
            ui.message(&format!("{:<8}  {}", policy_label(rule), row));
        }

        Ok(CommandResult::success())
    }
}
