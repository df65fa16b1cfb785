//! Specification loading and validation.
//!
//! - Schema types in [`schema`]
//! - File loading in [`loader`]
//! - Structural validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use checkenv::spec::{parse_spec, Rule};
//! use std::path::Path;
//!
//! let spec = parse_spec(r#"{"PORT": {"default": 8080}}"#, Path::new("env.json")).unwrap();
//! assert!(matches!(spec.get("PORT"), Some(Rule::Detailed(_))));
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    default_spec_path, load_spec_file, load_spec_value, parse_spec, DEFAULT_SPEC_FILE,
};
pub use schema::{
    is_valid_name, DefaultValue, ResolvedRule, Rule, RuleDetails, Specification, NAME_PATTERN,
};
pub use validator::{collect_violations, validate_document, SchemaViolation};
