//! Constants used throughout ssm-starter.
//!
//! Centralizes environment variable names and protocol values.

/// Separator between segments of a parameter name.
pub const PATH_SEPARATOR: char = '/';

/// Region variable that must be present before anything else runs.
pub const REGION_VAR: &str = "AWS_REGION";

/// Counterpart of [`REGION_VAR`] read by some AWS tooling.
pub const DEFAULT_REGION_VAR: &str = "AWS_DEFAULT_REGION";

/// Optional deployment environment used to scope relative names.
pub const SCOPE_VAR: &str = "AWS_ENV";

/// Log filter override (same syntax as `RUST_LOG`).
pub const LOG_VAR: &str = "SSM_STARTER_LOG";

/// Page size used for `GetParametersByPath`.
///
/// Ten is the maximum the service accepts for this call.
pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// Largest exit code passed through from the child untouched.
pub const MAX_EXIT_CODE: i32 = 127;

/// Exit code used when the child's code is out of range and for our own failures.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Parameter type reported for encrypted values.
pub const SECURE_STRING: &str = "SecureString";
