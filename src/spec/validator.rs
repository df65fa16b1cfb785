//! Structural validation of specification documents.
//!
//! The document is checked as raw JSON before it is turned into a typed
//! [`Specification`](super::Specification):
//! - the top level must be an object
//! - every key must be a valid variable name
//! - every rule must be a boolean or an object
//! - `required`, `description` and `default` must have the right types

use serde::Serialize;
use serde_json::Value;

use crate::error::{CheckenvError, Result};
use crate::spec::schema::{is_valid_name, NAME_PATTERN};

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaViolation {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Variable name if the violation is variable-specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
}

impl SchemaViolation {
    fn new(rule: &str, message: String, variable: Option<&str>) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            variable: variable.map(str::to_string),
        }
    }
}

/// Collect every violation in the document, in document order.
pub fn collect_violations(document: &Value) -> Vec<SchemaViolation> {
    let Value::Object(entries) = document else {
        return vec![SchemaViolation::new(
            "not-an-object",
            format!(
                "Specification must be a JSON object mapping variable names to rules, found {}",
                type_name(document)
            ),
            None,
        )];
    };

    let mut violations = Vec::new();
    for (name, rule) in entries {
        if !is_valid_name(name) {
            violations.push(SchemaViolation::new(
                "invalid-name",
                format!(
                    "'{}' is not a valid variable name (expected {})",
                    name, NAME_PATTERN
                ),
                Some(name),
            ));
        }
        violations.extend(validate_rule(name, rule));
    }

    violations
}

/// Validate a single rule value.
fn validate_rule(name: &str, rule: &Value) -> Vec<SchemaViolation> {
    let fields = match rule {
        Value::Bool(_) => return Vec::new(),
        Value::Object(fields) => fields,
        other => {
            return vec![SchemaViolation::new(
                "invalid-rule",
                format!(
                    "Rule for '{}' must be a boolean or an object, found {}",
                    name,
                    type_name(other)
                ),
                Some(name),
            )];
        }
    };

    let mut violations = Vec::new();

    if let Some(required) = fields.get("required") {
        if !required.is_boolean() {
            violations.push(SchemaViolation::new(
                "invalid-required",
                format!(
                    "'required' for '{}' must be a boolean, found {}",
                    name,
                    type_name(required)
                ),
                Some(name),
            ));
        }
    }

    if let Some(description) = fields.get("description") {
        if !description.is_string() {
            violations.push(SchemaViolation::new(
                "invalid-description",
                format!(
                    "'description' for '{}' must be a string, found {}",
                    name,
                    type_name(description)
                ),
                Some(name),
            ));
        }
    }

    if let Some(default) = fields.get("default") {
        if !(default.is_string() || default.is_number() || default.is_boolean()) {
            violations.push(SchemaViolation::new(
                "invalid-default",
                format!(
                    "'default' for '{}' must be a string, number or boolean, found {}",
                    name,
                    type_name(default)
                ),
                Some(name),
            ));
        } else if default.as_str().is_some_and(|d| d.contains('\0')) {
            violations.push(SchemaViolation::new(
                "invalid-default",
                format!("'default' for '{}' must not contain a NUL byte", name),
                Some(name),
            ));
        }
    }

    violations
}

/// Validate a document and fail on the first violation.
///
/// # Errors
///
/// Returns `SchemaValidation` carrying the first violation's message.
pub fn validate_document(document: &Value) -> Result<()> {
    match collect_violations(document).into_iter().next() {
        None => Ok(()),
        Some(violation) => Err(CheckenvError::SchemaValidation {
            message: violation.message,
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
