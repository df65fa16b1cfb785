//! Visual theme and styling.

use console::Style;

use crate::report::{ReportRow, ReportSection, SectionKind};

/// checkenv's visual theme.
#[derive(Debug, Clone)]
pub struct CheckenvTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Header of the missing section (white on red).
    pub missing_header: Style,
    /// Header of the optional section (black on yellow).
    pub optional_header: Style,
    /// Variable names (blue).
    pub name: Style,
    /// The `(default=...)` fragment (yellow).
    pub default: Style,
}

impl Default for CheckenvTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckenvTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            missing_header: Style::new().white().on_red(),
            optional_header: Style::new().black().on_yellow(),
            name: Style::new().blue(),
            default: Style::new().yellow(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            missing_header: Style::new(),
            optional_header: Style::new(),
            name: Style::new(),
            default: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a single report row.
    pub fn format_row(&self, row: &ReportRow) -> String {
        let mut line = self.name.apply_to(row.name()).to_string();
        if let Some(default) = row.shown_default() {
            let fragment = format!(" (default={})", default);
            line.push_str(&self.default.apply_to(fragment).to_string());
        }
        if let Some(description) = row.shown_description() {
            line.push(' ');
            line.push_str(description);
        }
        line
    }

    /// Format a report section as lines: blank separator, header, rows.
    pub fn format_section(&self, section: &ReportSection) -> Vec<String> {
        let header_style = match section.kind() {
            SectionKind::Missing => &self.missing_header,
            SectionKind::Optional => &self.optional_header,
        };

        let mut lines = Vec::with_capacity(section.rows().len() + 2);
        lines.push(String::new());
        lines.push(header_style.apply_to(section.header()).to_string());
        lines.extend(section.rows().iter().map(|row| self.format_row(row)));
        lines
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{DefaultValue, Rule, RuleDetails, Specification};

    fn sample_spec() -> Specification {
        Specification::new().with("A", Rule::required()).with(
            "B",
            Rule::Detailed(RuleDetails {
                required: Some(false),
                description: Some("listen port".into()),
                default: Some(DefaultValue::from(3000_i64)),
            }),
        )
    }

    #[test]
    fn theme_formats_success() {
        let msg = CheckenvTheme::plain().format_success("Complete");
        assert_eq!(msg, "✓ Complete");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = CheckenvTheme::plain().format_warning("Caution");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_error() {
        let msg = CheckenvTheme::plain().format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn plain_row_matches_display() {
        let row = ReportRow::from_spec("B", &sample_spec());
        assert_eq!(CheckenvTheme::plain().format_row(&row), row.to_string());
    }

    #[test]
    fn plain_section_has_separator_header_and_rows() {
        let names = vec!["A".to_string()];
        let section = ReportSection::new(SectionKind::Missing, &names, &sample_spec());
        let lines = CheckenvTheme::plain().format_section(&section);
        assert_eq!(
            lines,
            vec![
                String::new(),
                "The following 1 environment variable is required".to_string(),
                "A".to_string(),
            ]
        );
    }

    #[test]
    fn colored_theme_keeps_text() {
        let names = vec!["B".to_string()];
        let section = ReportSection::new(SectionKind::Optional, &names, &sample_spec());
        let lines = CheckenvTheme::new().format_section(&section);
        let text = console::strip_ansi_codes(&lines[2]).to_string();
        assert_eq!(text, "B (default=3000) listen port");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = CheckenvTheme::default();
        let new = CheckenvTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
