//! Test fixtures: parameter stores and a recording launcher.

use std::cell::RefCell;

use ssm_starter::core::env::Environment;
use ssm_starter::core::launch::Launcher;
use ssm_starter::core::store::MemoryStore;
use ssm_starter::error::Result;

pub const APP: &str = "/dev/ssm_starter_test_app";
pub const GLOBAL: &str = "/dev/ssm_starter_test_global";
pub const GLOBAL_DISTINCT: &str = "/dev/ssm_starter_test_global_distinct";

pub const TEST_STRING1: &str = "This is the value of test string 1";
pub const TEST_STRING2: &str = "This is the value of test string 2";
pub const TEST_SECURE1: &str = "Some secret";
pub const GLOBAL_STRING2: &str = "This may conflict with another String 1";
pub const TEST_DISTINCT1: &str = "This should not conflict with anything";

/// Store holding the standard parameter tree used across tests.
pub fn standard_store() -> MemoryStore {
    MemoryStore::new()
        .with(&format!("{}/TEST_STRING1", APP), TEST_STRING1, "String")
        .with(&format!("{}/TEST_STRING2", APP), TEST_STRING2, "String")
        .with(&format!("{}/TEST_SECURE1", APP), TEST_SECURE1, "SecureString")
        .with(&format!("{}/TEST_STRING2", GLOBAL), GLOBAL_STRING2, "String")
        .with(
            &format!("{}/TEST_DISTINCT1", GLOBAL_DISTINCT),
            TEST_DISTINCT1,
            "String",
        )
}

/// Launcher that records what it was asked to run and the environment it saw.
#[derive(Default)]
pub struct Recorder {
    pub code: Option<i32>,
    pub launches: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl Recorder {
    pub fn exiting_with(code: i32) -> Self {
        Self {
            code: Some(code),
            ..Self::default()
        }
    }

    pub fn launched(&self) -> bool {
        !self.launches.borrow().is_empty()
    }

    /// Value of `key` in the environment of the last launch.
    pub fn seen(&self, key: &str) -> Option<String> {
        self.launches
            .borrow()
            .last()
            .and_then(|(_, vars)| vars.iter().find(|(k, _)| k == key))
            .map(|(_, v)| v.clone())
    }
}

impl Launcher for Recorder {
    fn launch(&self, command: &str, env: &dyn Environment) -> Result<Option<i32>> {
        self.launches
            .borrow_mut()
            .push((command.to_string(), env.vars()));
        Ok(Some(self.code.unwrap_or(0)))
    }
}
