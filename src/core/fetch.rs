//! Paginated parameter retrieval.
//!
//! Follows continuation cursors until the store reports no more results and
//! decodes every item into a [`Parameter`]. Any failed request aborts the
//! whole fetch; there is no retry.

use tracing::{debug, error, info, warn};

use crate::core::constants::DEFAULT_PAGE_SIZE;
use crate::core::domain::{Parameter, RawParameter};
use crate::core::store::ParameterStore;
use crate::error::Result;

/// Reads every parameter under a path from a [`ParameterStore`].
pub struct ParameterFetcher<S> {
    store: S,
    page_size: i32,
}

impl<S: ParameterStore> ParameterFetcher<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page size sent with each request.
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Fetch all parameters under `path`, in the order the store returns them.
    ///
    /// Entries that cannot be decoded are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` as soon as any page request fails.
    pub fn fetch(&self, path: &str) -> Result<Vec<Parameter>> {
        info!(path, "Reading parameters from SSM path");

        let mut raw: Vec<RawParameter> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut page = 0usize;

        loop {
            page += 1;
            if page > 1 {
                info!(page, "Reading page of parameters by path");
            }

            let response = self
                .store
                .list_page(path, cursor.as_deref(), self.page_size)
                .map_err(|e| {
                    error!(path, page, error = %e, "Error querying list of ssm parameters");
                    e
                })?;

            debug!(
                store = self.store.name(),
                page,
                items = response.items.len(),
                "page fetched"
            );

            if response.items.is_empty() && (page > 1 || response.next_cursor.is_some()) {
                warn!(path, page, "No additional parameters found in subsequent page read");
            }

            raw.extend(response.items);

            match response.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        let parameters = decode_all(raw);
        info!(path, count = parameters.len(), "Read parameters from SSM");
        Ok(parameters)
    }
}

fn decode_all(raw: Vec<RawParameter>) -> Vec<Parameter> {
    raw.into_iter()
        .filter_map(|item| {
            let name = item.name.clone();
            match Parameter::decode(item) {
                Ok(parameter) => Some(parameter),
                Err(e) => {
                    error!(parameter = ?name, error = %e, "Error processing parameter");
                    None
                }
            }
        })
        .collect()
}
