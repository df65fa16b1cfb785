//! End-to-end check: load a specification and apply it.
//!
//! This is the entry point most programs need. It never exits the process;
//! [`FailureMode`] only decides whether a failed evaluation is reported as
//! an `Err` or left for the caller to inspect.
//!
//! # Example
//!
//! ```no_run
//! use checkenv::check::{check, CheckOptions, FailureMode};
//!
//! let options = CheckOptions::new("env.json").failure_mode(FailureMode::Error);
//! match check(&options) {
//!     Ok(outcome) => println!("{} optional variables", outcome.evaluation.optional.len()),
//!     Err(e) => {
//!         eprintln!("{}", e);
//!         std::process::exit(e.exit_code());
//!     }
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::engine::{evaluate, Environment, Evaluation, ProcessEnv};
use crate::error::{CheckenvError, Result};
use crate::report::Report;
use crate::spec::{load_spec_file, Specification, DEFAULT_SPEC_FILE};

/// How a failed evaluation is signaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Return the outcome; the caller turns `failed()` into an exit code.
    #[default]
    Exit,
    /// Return `Err(CheckFailed)` carrying the missing and optional lists.
    Error,
}

/// Options for [`check`].
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Path to the specification document.
    pub spec_path: PathBuf,
    /// How to signal a failed evaluation.
    pub failure_mode: FailureMode,
}

impl CheckOptions {
    pub fn new(spec_path: impl Into<PathBuf>) -> Self {
        Self {
            spec_path: spec_path.into(),
            failure_mode: FailureMode::default(),
        }
    }

    pub fn failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }

    pub fn spec_path(&self) -> &Path {
        &self.spec_path
    }
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self::new(DEFAULT_SPEC_FILE)
    }
}

/// A loaded specification and the result of applying it.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub specification: Specification,
    pub evaluation: Evaluation,
}

impl CheckOutcome {
    /// Whether any required variable is missing.
    pub fn failed(&self) -> bool {
        self.evaluation.failed()
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        if self.failed() {
            1
        } else {
            0
        }
    }

    /// Report rows for display.
    pub fn report(&self) -> Report {
        Report::new(&self.evaluation, &self.specification)
    }

    /// Defaults that were written into the environment, as `(name, value)`.
    pub fn injected_defaults(&self) -> Vec<(&str, String)> {
        self.evaluation
            .optional
            .iter()
            .filter_map(|name| {
                let default = self
                    .specification
                    .get(name)?
                    .default_value()
                    .filter(|d| d.is_applicable())?;
                Some((name.as_str(), default.to_env_value()))
            })
            .collect()
    }

    fn into_result(self, mode: FailureMode) -> Result<Self> {
        if mode == FailureMode::Error && self.failed() {
            return Err(CheckenvError::CheckFailed {
                missing: self.evaluation.missing,
                optional: self.evaluation.optional,
            });
        }
        Ok(self)
    }
}

/// Load the specification and apply it to the process environment.
///
/// # Errors
///
/// Returns loader errors unchanged. In [`FailureMode::Error`], a failed
/// evaluation is returned as `CheckFailed`.
pub fn check(options: &CheckOptions) -> Result<CheckOutcome> {
    check_with_env(options, &mut ProcessEnv::new())
}

/// Like [`check`], but against an explicit environment.
pub fn check_with_env<E: Environment + ?Sized>(
    options: &CheckOptions,
    env: &mut E,
) -> Result<CheckOutcome> {
    let specification = load_spec_file(&options.spec_path)?;
    let evaluation = evaluate(&specification, env);

    tracing::debug!(
        "Checked {} variables: {} missing, {} optional",
        specification.len(),
        evaluation.missing.len(),
        evaluation.optional.len()
    );

    CheckOutcome {
        specification,
        evaluation,
    }
    .into_result(options.failure_mode)
}
