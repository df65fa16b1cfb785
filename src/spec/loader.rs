//! Specification file loading.
//!
//! Reads a JSON document, validates its structure and produces a typed
//! [`Specification`]. Defaults are not resolved here; that happens lazily
//! in the engine.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CheckenvError, Result};
use crate::spec::schema::Specification;
use crate::spec::validator::validate_document;

/// File name used when no specification path is given.
pub const DEFAULT_SPEC_FILE: &str = "env.json";

/// Path of the default specification file relative to `dir`.
pub fn default_spec_path(dir: &Path) -> PathBuf {
    dir.join(DEFAULT_SPEC_FILE)
}

/// Load, parse and validate a specification file.
///
/// # Errors
///
/// Returns `SpecNotFound` if the file doesn't exist or cannot be opened.
/// Returns `SpecParseError` if the content is not valid JSON.
/// Returns `SchemaValidation` if the document violates the schema.
pub fn load_spec_file(path: &Path) -> Result<Specification> {
    let value = load_spec_value(path)?;
    validate_document(&value)?;
    tracing::debug!("Loaded specification from {}", path.display());
    Specification::from_document(value)
}

/// Parse and validate specification content.
///
/// # Arguments
///
/// * `content` - The JSON content to parse
/// * `source_path` - Path for error reporting
pub fn parse_spec(content: &str, source_path: &Path) -> Result<Specification> {
    let value = parse_spec_value(content, source_path)?;
    validate_document(&value)?;
    Specification::from_document(value)
}

/// Load a specification file as a raw JSON value, without validation.
pub fn load_spec_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
            CheckenvError::SpecNotFound {
                path: path.to_path_buf(),
            }
        }
        _ => CheckenvError::Io(e),
    })?;

    parse_spec_value(&content, path)
}

fn parse_spec_value(content: &str, source_path: &Path) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| CheckenvError::SpecParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
