//! Remote parameter store access.
//!
//! Abstracts the "list parameters by path" call so the fetch loop can run
//! against AWS Systems Manager or an in-memory store.
//!
//! ## Adding a New Store
//!
//! 1. Implement the `ParameterStore` trait
//! 2. Add the implementation in a new file
//! 3. Feature-gate if it pulls in an SDK
//! 4. Re-export from this module

use crate::core::domain::RawParameter;
use crate::core::types::Cursor;
use crate::error::Result;

mod memory;

#[cfg(feature = "aws")]
mod ssm;

pub use memory::MemoryStore;

#[cfg(feature = "aws")]
pub use ssm::SsmStore;

/// One page of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<RawParameter>,
    /// Present when more results remain.
    pub next_cursor: Option<Cursor>,
}

/// Paginated key-value-by-prefix store.
pub trait ParameterStore {
    /// Fetch one page of parameters under `path`.
    ///
    /// Implementations list recursively and return decrypted values.
    ///
    /// # Arguments
    ///
    /// * `path` - Fully qualified prefix, wrapped in separators
    /// * `cursor` - Continuation token from the previous page, if any
    /// * `page_size` - Upper bound on items returned
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Query` if the request fails.
    fn list_page(&self, path: &str, cursor: Option<&str>, page_size: i32) -> Result<Page>;

    /// Store name for logs.
    fn name(&self) -> &'static str;
}

impl<T: ParameterStore + ?Sized> ParameterStore for &T {
    fn list_page(&self, path: &str, cursor: Option<&str>, page_size: i32) -> Result<Page> {
        (**self).list_page(path, cursor, page_size)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
