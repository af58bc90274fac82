//! Test support utilities for ssm-starter integration tests.
//!
//! Provides fixture stores, a recording launcher, and CLI helpers.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use tempfile::TempDir;

/// CLI test environment with an isolated working directory.
///
/// Child processes use `.current_dir()` and explicit env vars so tests can
/// safely run in parallel.
pub struct Test {
    /// Temporary working directory for the launched command
    pub dir: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Whether the launched command left `name` behind in the work dir.
    pub fn has_file(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }
}
