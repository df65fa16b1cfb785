//! Shared display helpers.
//!
//! Used by `check`, `validate` and `list` to report loader failures and
//! evaluation sections consistently.

use std::path::Path;

use crate::error::CheckenvError;
use crate::report::Report;
use crate::ui::UserInterface;

use super::dispatcher::CommandResult;

/// Show a loader error and return the matching failure result.
pub fn show_load_error(
    ui: &mut dyn UserInterface,
    err: &CheckenvError,
    spec_path: &Path,
) -> CommandResult {
    match err {
        CheckenvError::SpecNotFound { .. } => {
            let absolute =
                std::path::absolute(spec_path).unwrap_or_else(|_| spec_path.to_path_buf());
            ui.error(&format!(
                "Unable to find checkenv configuration file \"{}\"",
                absolute.display()
            ));
        }
        other => ui.error(&other.to_string()),
    }
    CommandResult::failure(err.exit_code())
}

/// Show every non-empty section of a report, missing first.
pub fn show_report(ui: &mut dyn UserInterface, report: &Report) {
    for section in report.sections() {
        ui.show_section(section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Evaluation;
    use crate::report::SectionKind;
    use crate::spec::Specification;
    use crate::ui::MockUI;
    use std::path::PathBuf;

    #[test]
    fn not_found_mentions_absolute_path() {
        let mut ui = MockUI::new();
        let err = CheckenvError::SpecNotFound {
            path: PathBuf::from("missing.json"),
        };

        let result = show_load_error(&mut ui, &err, Path::new("missing.json"));

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Unable to find checkenv configuration file"));
        let cwd = std::env::current_dir().unwrap();
        assert!(ui.has_error(&cwd.join("missing.json").display().to_string()));
    }

    #[test]
    fn schema_error_shows_message() {
        let mut ui = MockUI::new();
        let err = CheckenvError::SchemaValidation {
            message: "'1X' is not a valid variable name".into(),
        };

        let result = show_load_error(&mut ui, &err, Path::new("env.json"));

        assert_eq!(result.exit_code, 3);
        assert!(ui.has_error("'1X' is not a valid variable name"));
    }

    #[test]
    fn show_report_skips_empty_sections() {
        let mut ui = MockUI::new();
        let evaluation = Evaluation {
            missing: vec!["A".into()],
            optional: vec![],
        };
        let report = Report::new(&evaluation, &Specification::new());

        show_report(&mut ui, &report);

        assert_eq!(ui.sections().len(), 1);
        assert_eq!(ui.sections()[0].kind(), SectionKind::Missing);
    }
}
