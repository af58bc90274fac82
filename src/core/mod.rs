//! Core library components.
//!
//! Path building, paginated fetching, environment merging, and command
//! launch, plus the orchestrator that runs them in order.

pub mod constants;
pub mod domain;
pub mod env;
pub mod fetch;
pub mod launch;
#[cfg(test)]
mod logs;
pub mod merge;
pub mod path;
pub mod region;
pub mod starter;
pub mod store;
pub mod types;
