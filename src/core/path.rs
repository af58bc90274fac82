//! Parameter path construction and validation.
//!
//! A requested name is either fully qualified (`/dev/app`) or relative to a
//! scope taken from `AWS_ENV` (`app` with `AWS_ENV=dev`). Mixing the two is
//! ambiguous and rejected before any request is made.

use crate::core::constants::{PATH_SEPARATOR, SCOPE_VAR};
use crate::core::types::ParameterPath;
use crate::error::ValidationError;

/// Check that a requested name fits the scope.
///
/// # Errors
///
/// Returns `ValidationError` if the name is empty, is fully qualified while a
/// scope is set, or is relative while no scope is set.
pub fn validate(name: &str, scope: Option<&str>) -> Result<(), ValidationError> {
    let qualified = match name.chars().next() {
        Some(first) => first == PATH_SEPARATOR,
        None => return Err(ValidationError::EmptyName),
    };

    match (qualified, scope) {
        (true, Some(_)) => Err(ValidationError::ScopedAbsolute {
            name: name.to_string(),
            scope_var: SCOPE_VAR,
        }),
        (false, None) => Err(ValidationError::UnscopedRelative {
            name: name.to_string(),
            scope_var: SCOPE_VAR,
        }),
        _ => Ok(()),
    }
}

/// Boolean form of [`validate`].
pub fn is_valid(name: &str, scope: Option<&str>) -> bool {
    validate(name, scope).is_ok()
}

/// Validate every name, stopping at the first failure.
pub fn validate_all<S: AsRef<str>>(names: &[S], scope: Option<&str>) -> Result<(), ValidationError> {
    names
        .iter()
        .try_for_each(|name| validate(name.as_ref(), scope))
}

/// Build the remote path for a validated name.
///
/// The result always starts and ends with the separator.
pub fn build(name: &str, scope: Option<&str>) -> ParameterPath {
    let mut path = match scope {
        Some(scope) => format!("{sep}{scope}{sep}{name}", sep = PATH_SEPARATOR),
        None => name.to_string(),
    };

    if !path.starts_with(PATH_SEPARATOR) {
        path.insert(0, PATH_SEPARATOR);
    }
    if !path.ends_with(PATH_SEPARATOR) {
        path.push(PATH_SEPARATOR);
    }
    path
}
