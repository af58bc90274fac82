//! Load-then-launch orchestration.
//!
//! ```text
//! Init -> Validating -> Fetching -> Merging -> DuplicateCheck -> Launching -> Done
//!   \          \                                   \
//!    `----------`------------> Aborted <------------`
//! ```
//!
//! Every name is validated before the first request, and all paths are
//! fetched before the environment is touched, so a bad name or a failed
//! request leaves the environment as it was.

use std::fmt;

use tracing::{debug, error, info};

use crate::core::constants::{DEFAULT_PAGE_SIZE, SCOPE_VAR};
use crate::core::domain::{DuplicatePolicy, Parameter};
use crate::core::env::Environment;
use crate::core::fetch::ParameterFetcher;
use crate::core::launch::{self, Launcher};
use crate::core::store::ParameterStore;
use crate::core::types::RequestedName;
use crate::core::{merge, path, region};
use crate::error::{Error, Result};

/// What to load and what to run afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Prefixes to load, in priority order.
    pub names: Vec<RequestedName>,
    pub policy: DuplicatePolicy,
    /// Shell command line to launch.
    pub command: String,
    pub page_size: i32,
}

impl Request {
    pub fn new(names: Vec<RequestedName>, command: impl Into<String>) -> Self {
        Self {
            names,
            policy: DuplicatePolicy::default(),
            command: command.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = page_size;
        self
    }
}

/// Orchestrator progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Init,
    Validating,
    Fetching,
    Merging,
    DuplicateCheck,
    Launching,
    Done,
    Aborted,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Init => "init",
            State::Validating => "validating",
            State::Fetching => "fetching",
            State::Merging => "merging",
            State::DuplicateCheck => "duplicate-check",
            State::Launching => "launching",
            State::Done => "done",
            State::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// Wires path building, fetching, merging, and launching together.
pub struct Starter<S, E, L> {
    store: S,
    env: E,
    launcher: L,
    state: State,
}

impl<S, E, L> Starter<S, E, L>
where
    S: ParameterStore,
    E: Environment,
    L: Launcher,
{
    pub fn new(store: S, env: E, launcher: L) -> Self {
        Self {
            store,
            env,
            launcher,
            state: State::Init,
        }
    }

    /// Current state; `Done` or `Aborted` once `run` returns.
    pub fn state(&self) -> State {
        self.state
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Load parameters for `request` and launch its command.
    ///
    /// Returns the child's normalized exit code.
    ///
    /// # Errors
    ///
    /// - `ConfigError` if `AWS_REGION` is missing
    /// - `ValidationError` if any name does not fit the scope
    /// - `StoreError` if any page request fails
    /// - `Error::DuplicatesFound` under `DuplicatePolicy::Abort`
    /// - `Error::Launch` if the command cannot be started
    pub fn run(&mut self, request: &Request) -> Result<i32> {
        self.state = State::Init;
        let region = region::reconcile(&mut self.env).map_err(|e| self.abort(e))?;
        debug!(region = %region, "region resolved");

        self.enter(State::Validating);
        let scope = self.env.get(SCOPE_VAR).filter(|s| !s.is_empty());
        path::validate_all(&request.names, scope.as_deref())
            .map_err(|e| self.abort(e.into()))?;

        self.enter(State::Fetching);
        let fetcher = ParameterFetcher::new(&self.store).with_page_size(request.page_size);
        let mut parameters: Vec<Parameter> = Vec::new();
        for name in &request.names {
            let path = path::build(name, scope.as_deref());
            parameters.extend(fetcher.fetch(&path)?);
        }

        self.enter(State::Merging);
        let result = merge::merge(&parameters, request.policy, &mut self.env);
        debug!(
            applied = result.applied.len(),
            duplicates = result.duplicate_keys.len(),
            failed = result.failed,
            "merge complete"
        );

        self.enter(State::DuplicateCheck);
        if result.has_duplicates() && request.policy == DuplicatePolicy::Abort {
            let keys = result.duplicate_keys.into_iter().collect();
            return Err(self.abort(Error::DuplicatesFound(keys)));
        }

        self.enter(State::Launching);
        let code = launch::run(&self.launcher, &request.command, &self.env)?;

        self.enter(State::Done);
        info!(exit_code = code, "SSM Starter - exiting");
        Ok(code)
    }

    fn enter(&mut self, state: State) {
        debug!(from = %self.state, to = %state, "transition");
        self.state = state;
    }

    fn abort(&mut self, err: Error) -> Error {
        error!(state = %self.state, "SSM Starter - ERROR, exiting: {}", err);
        self.state = State::Aborted;
        err
    }
}
