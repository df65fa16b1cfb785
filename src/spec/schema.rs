//! Specification schema definitions.
//!
//! This module contains the types that map to the `env.json` document:
//! an ordered mapping from variable name to [`Rule`].

use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{CheckenvError, Result};

/// Pattern every declared variable name must match.
pub const NAME_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

/// Fields recognized inside a structured rule.
pub const RULE_FIELDS: &[&str] = &["required", "description", "default"];

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("NAME_PATTERN must compile"));

/// Check whether `name` is an acceptable environment variable name.
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// A validated specification of expected environment variables.
///
/// Variables keep the order in which they appear in the source document,
/// and names are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Specification {
    variables: Vec<(String, Rule)>,
}

impl Specification {
    /// Create an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a specification from an already validated JSON document.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidation` if the document is not an object or a rule
    /// cannot be deserialized.
    pub fn from_document(document: Value) -> Result<Self> {
        let Value::Object(entries) = document else {
            return Err(CheckenvError::SchemaValidation {
                message: "Specification must be a JSON object".to_string(),
            });
        };

        let mut spec = Self::new();
        for (name, raw) in entries {
            if let Value::Object(fields) = &raw {
                for field in fields.keys().filter(|f| !RULE_FIELDS.contains(&f.as_str())) {
                    tracing::warn!("Ignoring unknown field '{}' in rule for '{}'", field, name);
                }
            }

            let rule: Rule =
                serde_json::from_value(raw).map_err(|e| CheckenvError::SchemaValidation {
                    message: format!("Invalid rule for '{}': {}", name, e),
                })?;
            spec.insert(name, rule);
        }

        Ok(spec)
    }

    /// Add a variable, replacing any existing rule with the same name.
    pub fn insert(&mut self, name: impl Into<String>, rule: Rule) {
        let name = name.into();
        match self.variables.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = rule,
            None => self.variables.push((name, rule)),
        }
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.insert(name, rule);
        self
    }

    /// Look up the rule for a variable.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.variables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rule)| rule)
    }

    /// Iterate over `(name, rule)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.variables.iter().map(|(n, r)| (n.as_str(), r))
    }

    /// Number of declared variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variables are declared.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl Serialize for Specification {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.variables.len()))?;
        for (name, rule) in &self.variables {
            map.serialize_entry(name, rule)?;
        }
        map.end()
    }
}

/// Requirement rule for a single variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rule {
    /// Shorthand: `true` means required, `false` means not required.
    Flag(bool),
    /// Structured rule with optional fields.
    Detailed(RuleDetails),
}

impl Rule {
    /// Shorthand for a required variable with no default.
    pub fn required() -> Self {
        Self::Flag(true)
    }

    /// Shorthand for an optional variable with no default.
    pub fn optional() -> Self {
        Self::Flag(false)
    }

    /// Structured rule carrying only a default.
    pub fn with_default(default: impl Into<DefaultValue>) -> Self {
        Self::Detailed(RuleDetails {
            default: Some(default.into()),
            ..Default::default()
        })
    }

    /// Resolve to the effective `(required, default)` pair.
    pub fn resolve(&self) -> ResolvedRule {
        match self {
            Self::Flag(required) => ResolvedRule {
                required: *required,
                default: None,
            },
            Self::Detailed(details) => ResolvedRule {
                required: details.required.unwrap_or(true),
                default: details.default.clone(),
            },
        }
    }

    /// The configured default, if any.
    pub fn default_value(&self) -> Option<&DefaultValue> {
        match self {
            Self::Flag(_) => None,
            Self::Detailed(details) => details.default.as_ref(),
        }
    }

    /// The configured description, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Flag(_) => None,
            Self::Detailed(details) => details.description.as_deref(),
        }
    }
}

/// Fields of a structured rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleDetails {
    /// Whether the variable must be set (defaults to `true`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Informational description shown in reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Value injected when the variable is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
}

/// A default literal: string, number or boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl DefaultValue {
    /// Whether this default is actually injected.
    ///
    /// Empty strings, numeric zero and `false` are configured but never
    /// applied; the variable is then classified by its `required` flag.
    pub fn is_applicable(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Self::String(s) => !s.is_empty(),
        }
    }

    /// String form written into the environment.
    pub fn to_env_value(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for DefaultValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for DefaultValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

/// A rule reduced to what the engine acts on.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRule {
    pub required: bool,
    pub default: Option<DefaultValue>,
}
