//! SSM Starter - load AWS SSM parameters into the environment, then start your app.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── run           # Load parameters, then launch
//! │   └── output        # Diagnostics for fatal errors
//! └── core/             # Core library components
//!     ├── path          # Name validation and path building
//!     ├── store/        # Parameter store backends
//!     │   ├── mod       # ParameterStore trait
//!     │   ├── memory    # In-memory store
//!     │   └── ssm       # AWS Systems Manager (feature `aws`)
//!     ├── fetch         # Paginated fetch loop
//!     ├── env           # Environment trait (process / in-memory)
//!     ├── merge         # Duplicate-aware environment merge
//!     ├── region        # AWS_REGION precondition
//!     ├── launch        # Child process launch
//!     └── starter       # Orchestrator state machine
//! ```
//!
//! # Example
//!
//! ```
//! use ssm_starter::core::env::{Environment, MemoryEnv};
//! use ssm_starter::core::launch::Launcher;
//! use ssm_starter::core::starter::{Request, Starter};
//! use ssm_starter::core::store::MemoryStore;
//!
//! struct Noop;
//!
//! impl Launcher for Noop {
//!     fn launch(&self, _: &str, _: &dyn Environment) -> ssm_starter::error::Result<Option<i32>> {
//!         Ok(Some(0))
//!     }
//! }
//!
//! let store = MemoryStore::new().with("/dev/app/DATABASE_URL", "postgres://db", "String");
//! let env = MemoryEnv::from_pairs([("AWS_REGION", "us-east-1")]);
//! let mut starter = Starter::new(store, env, Noop);
//!
//! let code = starter.run(&Request::new(vec!["/dev/app".into()], "my-app")).unwrap();
//! assert_eq!(code, 0);
//! assert_eq!(starter.env().get("DATABASE_URL").as_deref(), Some("postgres://db"));
//! ```

pub mod cli;
pub mod core;
pub mod error;
