//! Environment access for the rule engine.
//!
//! The engine only reads values and writes defaults; it never removes
//! entries. [`ProcessEnv`] works on the real process environment and
//! [`MapEnv`] on an in-memory map.

use std::collections::HashMap;

/// Read/write view of an environment.
pub trait Environment {
    /// Current value of a variable, if set.
    fn get(&self, name: &str) -> Option<String>;

    /// Set a variable.
    fn set(&mut self, name: &str, value: &str);
}

/// The environment of the current process.
///
/// Writes go through `std::env::set_var`, which is process-global and
/// unsynchronized. Callers must not evaluate concurrently with other
/// threads that mutate the environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        // Non-UTF-8 values still count as set.
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }

    fn set(&mut self, name: &str, value: &str) {
        // set_var panics on interior NUL bytes.
        if name.contains('\0') || value.contains('\0') {
            tracing::warn!("Not setting {}: value contains a NUL byte", name);
            return;
        }
        std::env::set_var(name, value);
    }
}

/// In-memory environment, useful for tests and dry runs.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    /// Snapshot of the current process environment.
    pub fn from_process() -> Self {
        std::env::vars().collect()
    }

    /// All variables.
    pub fn vars(&self) -> &HashMap<String, String> {
        &self.vars
    }
}

impl Environment for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }
}

impl FromIterator<(String, String)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<String, String>> for MapEnv {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

/// Serializes tests that read or write the process environment.
#[cfg(test)]
pub(crate) fn lock_process_env() -> std::sync::MutexGuard<'static, ()> {
    static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
    ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
}
