//! Domain types.
//!
//! Parameters as they come back from the store and the policy that governs
//! how they land in the environment.

mod parameter;
mod policy;

pub use parameter::{Parameter, ParameterKind, RawParameter};
pub use policy::{DuplicatePolicy, MergeResult};
