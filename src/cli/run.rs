//! Run command.
//!
//! Loads parameters into the live process environment and launches the
//! requested command with it.

use tracing::info;

use crate::core::env::ProcessEnv;
use crate::core::launch::ShellLauncher;
use crate::core::starter::{Request, Starter};
use crate::error::Result;

/// Load parameters for `request` and run its command, returning the exit code.
pub fn execute(request: &Request) -> Result<i32> {
    info!("SSM Starter version {}", env!("CARGO_PKG_VERSION"));

    let store = store()?;
    let mut starter = Starter::new(store, ProcessEnv, ShellLauncher);
    starter.run(request)
}

#[cfg(feature = "aws")]
fn store() -> Result<crate::core::store::SsmStore> {
    crate::core::store::SsmStore::new()
}

#[cfg(not(feature = "aws"))]
fn store() -> Result<crate::core::store::MemoryStore> {
    Err(crate::error::StoreError::Unavailable("aws").into())
}
