//! AWS Systems Manager Parameter Store backend.
//!
//! Lists parameters with `GetParametersByPath`, recursively and with
//! decryption. Enable with `--features aws` (on by default).
//!
//! Credentials and region come from the default provider chain
//! (`AWS_REGION`, `AWS_ACCESS_KEY_ID`, profiles, instance roles, ...).

use std::cell::OnceCell;

use aws_sdk_ssm::error::DisplayErrorContext;
use tracing::trace;

use super::{Page, ParameterStore};
use crate::core::domain::RawParameter;
use crate::error::{Result, StoreError};

/// Parameter Store client.
///
/// The SDK is async; requests are driven on a private current-thread
/// runtime. The client is built on the first request, so creating a store
/// never touches the network or the credential chain.
pub struct SsmStore {
    runtime: tokio::runtime::Runtime,
    client: OnceCell<aws_sdk_ssm::Client>,
}

impl SsmStore {
    /// Create a store using the default AWS configuration.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Runtime` if the async runtime cannot be built.
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Runtime(e.to_string()))?;

        Ok(Self {
            runtime,
            client: OnceCell::new(),
        })
    }

    fn client(&self) -> &aws_sdk_ssm::Client {
        self.client.get_or_init(|| {
            let config = self
                .runtime
                .block_on(aws_config::load_defaults(aws_config::BehaviorVersion::latest()));
            aws_sdk_ssm::Client::new(&config)
        })
    }
}

impl ParameterStore for SsmStore {
    fn list_page(&self, path: &str, cursor: Option<&str>, page_size: i32) -> Result<Page> {
        trace!(path, cursor = ?cursor, page_size, "GetParametersByPath");
        let client = self.client();

        let output = self
            .runtime
            .block_on(
                client
                    .get_parameters_by_path()
                    .path(path)
                    .recursive(true)
                    .with_decryption(true)
                    .max_results(page_size)
                    .set_next_token(cursor.map(str::to_string))
                    .send(),
            )
            .map_err(|e| StoreError::Query {
                path: path.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        let items = output
            .parameters()
            .iter()
            .map(|p| RawParameter {
                name: p.name().map(str::to_string),
                value: p.value().map(str::to_string),
                kind: p.r#type().map(|t| t.as_str().to_string()),
            })
            .collect::<Vec<_>>();

        trace!(
            items = items.len(),
            more = output.next_token().is_some(),
            "page received"
        );

        Ok(Page {
            items,
            next_cursor: output.next_token().map(str::to_string),
        })
    }

    fn name(&self) -> &'static str {
        "aws-ssm"
    }
}
