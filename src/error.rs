//! Error types for ssm-starter.
//!
//! Fatal stage failures surface as [`Error`]. Per-parameter problems are
//! reported as [`ParameterError`] and recovered where they occur.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error("duplicate parameter names found and --abort-if-duplicates is set: {}", .0.join(", "))]
    DuplicatesFound(Vec<String>),

    #[error("failed to launch command: {0}")]
    Launch(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Missing or unusable process configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} not found in environment")]
    MissingVar(&'static str),
}

/// Requested name cannot be turned into an unambiguous remote path.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid SSM parameter name; empty name given")]
    EmptyName,

    #[error("invalid SSM parameter name; {scope_var} can not be combined with fully qualified path: {name}")]
    ScopedAbsolute {
        name: String,
        scope_var: &'static str,
    },

    #[error("invalid SSM parameter name; {scope_var} not specified and fully qualified path not given for: {name}")]
    UnscopedRelative {
        name: String,
        scope_var: &'static str,
    },
}

/// Remote parameter store failure.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("error querying list of ssm parameters under {path}: {reason}")]
    Query { path: String, reason: String },

    #[error("failed to start store runtime: {0}")]
    Runtime(String),

    #[error("no parameter store available: built without the `{0}` feature")]
    Unavailable(&'static str),
}

/// A single parameter that could not be processed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParameterError {
    #[error("parameter is missing its {0}")]
    MissingField(&'static str),

    #[error("parameter name '{0}' has no leaf segment")]
    EmptyKey(String),

    #[error("'{key}' can not be used as an environment variable: {reason}")]
    InvalidVariable { key: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
