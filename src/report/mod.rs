//! Evaluation reports.
//!
//! A [`Report`] pairs the names from an [`Evaluation`] with the rule
//! details from the [`Specification`] so each row can show its default and
//! description. Rendering with colors lives in [`crate::ui`].
//!
//! # Example
//!
//! ```
//! use checkenv::report::ReportRow;
//!
//! let row = ReportRow::new("PORT", Some("8080".into()), Some("HTTP port".into()));
//! assert_eq!(row.to_string(), "PORT (default=8080) HTTP port");
//! ```

use serde::Serialize;
use std::fmt;

use crate::engine::Evaluation;
use crate::spec::{DefaultValue, Specification};

/// Which outcome list a section describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Missing,
    Optional,
}

/// One variable in a report section.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    name: String,
    default: Option<DefaultValue>,
    description: Option<String>,
}

impl ReportRow {
    /// Create a row.
    pub fn new(
        name: impl Into<String>,
        default: Option<DefaultValue>,
        description: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            default,
            description,
        }
    }

    /// Build a row for `name`, looking its rule up in `spec`.
    pub fn from_spec(name: &str, spec: &Specification) -> Self {
        let rule = spec.get(name);
        Self::new(
            name,
            rule.and_then(|r| r.default_value()).cloned(),
            rule.and_then(|r| r.description()).map(str::to_string),
        )
    }

    /// The environment variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configured default, if provided.
    pub fn default(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    /// The configured description, if provided.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The default as displayed; inapplicable defaults are hidden.
    pub fn shown_default(&self) -> Option<&DefaultValue> {
        self.default.as_ref().filter(|d| d.is_applicable())
    }

    /// The description as displayed; empty descriptions are hidden.
    pub fn shown_description(&self) -> Option<&str> {
        self.description().filter(|d| !d.is_empty())
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(default) = self.shown_default() {
            write!(f, " (default={})", default)?;
        }
        if let Some(description) = self.shown_description() {
            write!(f, " {}", description)?;
        }
        Ok(())
    }
}

/// Pluralizing fragment for the section header.
pub fn plural_fragment(count: usize) -> &'static str {
    if count == 1 {
        " is"
    } else {
        "s are"
    }
}

/// A titled group of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    kind: SectionKind,
    rows: Vec<ReportRow>,
}

impl ReportSection {
    /// Build a section from outcome names.
    pub fn new(kind: SectionKind, names: &[String], spec: &Specification) -> Self {
        Self {
            kind,
            rows: names
                .iter()
                .map(|name| ReportRow::from_spec(name, spec))
                .collect(),
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Summary line for the section.
    pub fn header(&self) -> String {
        let suffix = match self.kind {
            SectionKind::Missing => "required",
            SectionKind::Optional => "missing (but optional)",
        };
        let count = self.rows.len();
        format!(
            "The following {} environment variable{} {}",
            count,
            plural_fragment(count),
            suffix
        )
    }
}

impl fmt::Display for ReportSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header())?;
        for row in &self.rows {
            write!(f, "\n{}", row)?;
        }
        Ok(())
    }
}

/// Both sections of an evaluation report.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    missing: ReportSection,
    optional: ReportSection,
}

impl Report {
    /// Build a report for an evaluation of `spec`.
    pub fn new(evaluation: &Evaluation, spec: &Specification) -> Self {
        Self {
            missing: ReportSection::new(SectionKind::Missing, &evaluation.missing, spec),
            optional: ReportSection::new(SectionKind::Optional, &evaluation.optional, spec),
        }
    }

    pub fn missing(&self) -> &ReportSection {
        &self.missing
    }

    pub fn optional(&self) -> &ReportSection {
        &self.optional
    }

    /// Sections worth printing, missing first.
    pub fn sections(&self) -> impl Iterator<Item = &ReportSection> {
        [&self.missing, &self.optional]
            .into_iter()
            .filter(|s| !s.is_empty())
    }
}

/// Machine-readable form of an evaluation.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub missing: &'a [String],
    pub optional: &'a [String],
    pub failed: bool,
}

impl<'a> JsonReport<'a> {
    pub fn new(evaluation: &'a Evaluation) -> Self {
        Self {
            missing: &evaluation.missing,
            optional: &evaluation.optional,
            failed: evaluation.failed(),
        }
    }
}
