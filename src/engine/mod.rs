//! Rule engine: applies a specification to an environment.
//!
//! For each declared variable, in specification order:
//! 1. A present, non-empty value satisfies the rule; nothing is recorded.
//! 2. Otherwise an applicable default is written into the environment and
//!    the variable is recorded as optional, even when it is required.
//! 3. Otherwise the variable is recorded as missing if required, or as
//!    optional if not.
//!
//! # Example
//!
//! ```
//! use checkenv::engine::{evaluate, Environment, MapEnv};
//! use checkenv::spec::{Rule, Specification};
//!
//! let spec = Specification::new()
//!     .with("A", Rule::required())
//!     .with("B", Rule::with_default("3000"))
//!     .with("C", Rule::optional());
//!
//! let mut env = MapEnv::new();
//! let evaluation = evaluate(&spec, &mut env);
//!
//! assert_eq!(evaluation.missing, vec!["A"]);
//! assert_eq!(evaluation.optional, vec!["B", "C"]);
//! assert_eq!(env.get("B").as_deref(), Some("3000"));
//! assert!(evaluation.failed());
//! ```

pub mod environment;

pub use environment::{Environment, MapEnv, ProcessEnv};

use serde::Serialize;

use crate::spec::{ResolvedRule, Specification};

/// Outcome of one evaluation pass.
///
/// `missing` and `optional` are disjoint and keep specification order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Required variables that are absent and have no applicable default.
    pub missing: Vec<String>,
    /// Absent variables excused by policy or satisfied by a default.
    pub optional: Vec<String>,
}

impl Evaluation {
    /// Whether any required variable is missing.
    pub fn failed(&self) -> bool {
        !self.missing.is_empty()
    }
}

/// What the engine decided for a single variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Present with a non-empty value.
    Satisfied,
    /// Absent; the given default is injected.
    Defaulted(String),
    /// Absent, required, no default.
    Missing,
    /// Absent and not required.
    Optional,
}

/// Whether an environment value counts as set.
///
/// An empty string is treated exactly like an absent variable.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Decide the outcome for one variable given its current value.
pub fn decide(rule: &ResolvedRule, current: Option<&str>) -> Decision {
    if is_present(current) {
        return Decision::Satisfied;
    }

    if let Some(default) = rule.default.as_ref().filter(|d| d.is_applicable()) {
        return Decision::Defaulted(default.to_env_value());
    }

    if rule.required {
        Decision::Missing
    } else {
        Decision::Optional
    }
}

/// Evaluate a specification against an environment, injecting defaults.
pub fn evaluate<E: Environment + ?Sized>(spec: &Specification, env: &mut E) -> Evaluation {
    let mut evaluation = Evaluation::default();

    for (name, rule) in spec.iter() {
        let current = env.get(name);
        match decide(&rule.resolve(), current.as_deref()) {
            Decision::Satisfied => {
                tracing::debug!("{} is set", name);
            }
            Decision::Defaulted(value) => {
                tracing::info!("{} is not set, using default '{}'", name, value);
                env.set(name, &value);
                evaluation.optional.push(name.to_string());
            }
            Decision::Missing => {
                tracing::debug!("{} is required but not set", name);
                evaluation.missing.push(name.to_string());
            }
            Decision::Optional => {
                tracing::debug!("{} is optional and not set", name);
                evaluation.optional.push(name.to_string());
            }
        }
    }

    evaluation
}
