//! checkenv - Ensures specified environment variables are present during runtime.
//!
//! A program declares the environment variables it depends on in a JSON
//! specification (`env.json` by default). checkenv validates that document,
//! injects defaults for unset variables, and reports which required
//! variables are missing and which optional ones are unset.
//!
//! # Modules
//!
//! - [`check`] - Load-then-evaluate entry point
//! - [`cli`] - Command-line interface and argument parsing
//! - [`engine`] - Rule evaluation against an environment
//! - [`error`] - Error types and result aliases
//! - [`report`] - Missing/optional report model
//! - [`spec`] - Specification loading, parsing and validation
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use checkenv::engine::{evaluate, MapEnv};
//! use checkenv::spec::{Rule, Specification};
//!
//! let spec = Specification::new()
//!     .with("DATABASE_URL", Rule::required())
//!     .with("PORT", Rule::with_default(3000_i64));
//!
//! let mut env = MapEnv::new();
//! let evaluation = evaluate(&spec, &mut env);
//!
//! assert_eq!(evaluation.missing, vec!["DATABASE_URL"]);
//! assert_eq!(env.vars().get("PORT").map(String::as_str), Some("3000"));
//! ```
//!
//! For file-based checks, see [`check::check`] and the integration tests.

pub mod check;
pub mod cli;
pub mod engine;
pub mod error;
pub mod report;
pub mod spec;
pub mod ui;

pub use error::{CheckenvError, Result};
