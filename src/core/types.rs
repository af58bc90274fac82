//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A prefix given with `--ssm-name`, relative or fully qualified.
pub type RequestedName = String;

/// A fully qualified parameter path, always wrapped in separators.
pub type ParameterPath = String;

/// An environment variable name derived from a parameter's leaf segment.
pub type EnvKey = String;

/// Opaque continuation token returned by a paginated listing.
pub type Cursor = String;
