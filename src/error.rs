//! Error types for checkenv operations.
//!
//! This module defines [`CheckenvError`], the error type returned by the
//! specification loader and the [`check`](crate::check::check) entry point,
//! and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Loader failures (`SpecNotFound`, `SpecParseError`, `SchemaValidation`)
//!   are always surfaced to the caller, never retried
//! - The rule engine itself never fails
//! - `CheckFailed` is the structured form of a failed evaluation, produced
//!   only when the caller asks for errors instead of an exit code

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for checkenv operations.
#[derive(Debug, Error)]
pub enum CheckenvError {
    /// Specification file could not be found or opened.
    #[error("Specification not found: {path}")]
    SpecNotFound { path: PathBuf },

    /// Specification file is not well-formed JSON.
    #[error("Failed to parse specification at {path}: {message}")]
    SpecParseError { path: PathBuf, message: String },

    /// Specification is well-formed but violates the schema.
    #[error("Invalid specification: {message}")]
    SchemaValidation { message: String },

    /// One or more required environment variables are missing.
    #[error("Missing required environment variables: {}", missing.join(", "))]
    CheckFailed {
        missing: Vec<String>,
        optional: Vec<String>,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CheckenvError {
    /// Exit code the CLI uses when this error ends the process.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CheckFailed { .. } => 1,
            Self::SpecNotFound { .. } => 2,
            Self::SpecParseError { .. } | Self::SchemaValidation { .. } => 3,
            Self::Io(_) | Self::Other(_) => 1,
        }
    }
}

/// Result type alias for checkenv operations.
pub type Result<T> = std::result::Result<T, CheckenvError>;
