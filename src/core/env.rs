//! Environment variable storage.
//!
//! The merger and launcher work against the [`Environment`] trait so tests
//! can substitute a map for the live process environment.

use std::collections::BTreeMap;

use crate::error::ParameterError;

/// Mutable key-value view of an environment.
pub trait Environment {
    /// Value of a variable, if set and valid unicode.
    fn get(&self, key: &str) -> Option<String>;

    /// Whether a variable is set.
    fn contains(&self, key: &str) -> bool;

    /// Set a variable.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::InvalidVariable` if the pair cannot be
    /// stored in a process environment.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ParameterError>;

    /// All variables, for handing to a child process.
    fn vars(&self) -> Vec<(String, String)>;

    /// Whether this is the live process environment, which a child inherits
    /// as-is, including entries that are not valid unicode.
    fn is_process(&self) -> bool {
        false
    }
}

/// The current process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn contains(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ParameterError> {
        check_variable(key, value)?;
        std::env::set_var(key, value);
        Ok(())
    }

    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    fn is_process(&self) -> bool {
        true
    }
}

/// In-memory environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from key-value pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Environment for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ParameterError> {
        check_variable(key, value)?;
        self.vars.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Reject pairs that `std::env::set_var` would panic on.
fn check_variable(key: &str, value: &str) -> Result<(), ParameterError> {
    let reason = if key.is_empty() {
        Some("empty name")
    } else if key.contains('=') {
        Some("name contains '='")
    } else if key.contains('\0') {
        Some("name contains a NUL byte")
    } else if value.contains('\0') {
        Some("value contains a NUL byte")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ParameterError::InvalidVariable {
            key: key.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
