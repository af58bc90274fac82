//! Duplicate handling policy and merge outcome.

use std::collections::BTreeSet;

use crate::core::types::EnvKey;

/// What to do when a parameter's key is already in the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Keep the existing value.
    #[default]
    Skip,
    /// Replace the existing value.
    Overwrite,
    /// Keep the existing value, then refuse to launch.
    Abort,
}

impl DuplicatePolicy {
    /// Build from the two mutually exclusive CLI switches.
    pub fn from_flags(abort_if_duplicates: bool, overwrite_if_duplicates: bool) -> Self {
        match (abort_if_duplicates, overwrite_if_duplicates) {
            (true, _) => Self::Abort,
            (false, true) => Self::Overwrite,
            (false, false) => Self::Skip,
        }
    }
}

/// Outcome of one merge pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeResult {
    pub duplicate_keys: BTreeSet<EnvKey>,
    /// Keys written to the environment, in merge order.
    pub applied: Vec<EnvKey>,
    /// Parameters skipped because they could not be processed.
    pub failed: usize,
}

impl MergeResult {
    pub fn has_duplicates(&self) -> bool {
        !self.duplicate_keys.is_empty()
    }
}
