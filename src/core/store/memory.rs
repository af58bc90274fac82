//! In-memory parameter store.
//!
//! Paginates a fixed list the way the remote service does. Cursors are the
//! stringified offset of the next item.

use std::cell::RefCell;

use super::{Page, ParameterStore};
use crate::core::constants::PATH_SEPARATOR;
use crate::core::domain::RawParameter;
use crate::error::{Result, StoreError};

/// Parameter store backed by a `Vec`, for tests and local runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Vec<RawParameter>,
    fail_on_page: Option<usize>,
    fail_path: Option<String>,
    empty_page_after: Option<usize>,
    requests: RefCell<Vec<(String, Option<String>)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter. Items keep insertion order.
    pub fn with(mut self, name: &str, value: &str, kind: &str) -> Self {
        self.items.push(RawParameter::new(name, value, kind));
        self
    }

    /// Add an entry as-is, including malformed ones.
    pub fn with_raw(mut self, raw: RawParameter) -> Self {
        self.items.push(raw);
        self
    }

    /// Fail the request for the given 1-based page number.
    pub fn failing_on_page(mut self, page: usize) -> Self {
        self.fail_on_page = Some(page);
        self
    }

    /// Fail every request for `path`.
    pub fn failing_on_path(mut self, path: &str) -> Self {
        self.fail_path = Some(path.to_string());
        self
    }

    /// Return an empty page carrying a cursor right after the given 1-based page.
    pub fn with_empty_page_after(mut self, page: usize) -> Self {
        self.empty_page_after = Some(page);
        self
    }

    /// Requests seen so far as `(path, cursor)` pairs.
    pub fn requests(&self) -> Vec<(String, Option<String>)> {
        self.requests.borrow().clone()
    }

    fn under<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a RawParameter> + 'a {
        let prefix = if path.ends_with(PATH_SEPARATOR) {
            path.to_string()
        } else {
            format!("{}{}", path, PATH_SEPARATOR)
        };
        self.items.iter().filter(move |raw| {
            raw.name
                .as_deref()
                .map(|name| name.starts_with(&prefix))
                .unwrap_or(true)
        })
    }
}

impl ParameterStore for MemoryStore {
    fn list_page(&self, path: &str, cursor: Option<&str>, page_size: i32) -> Result<Page> {
        self.requests
            .borrow_mut()
            .push((path.to_string(), cursor.map(str::to_string)));
        let page_number = self
            .requests
            .borrow()
            .iter()
            .filter(|(p, _)| p == path)
            .count();

        if self.fail_on_page == Some(page_number) || self.fail_path.as_deref() == Some(path) {
            return Err(StoreError::Query {
                path: path.to_string(),
                reason: format!("injected failure on page {}", page_number),
            }
            .into());
        }

        let size = usize::try_from(page_size).unwrap_or(1).max(1);
        let (offset, empty) = match cursor {
            None => (0, false),
            Some(c) => match c.strip_prefix("empty:") {
                Some(rest) => (parse_cursor(path, rest)?, true),
                None => (parse_cursor(path, c)?, false),
            },
        };

        let matching: Vec<&RawParameter> = self.under(path).collect();

        if empty {
            return Ok(Page {
                items: Vec::new(),
                next_cursor: Some(offset.to_string()),
            });
        }

        let end = (offset + size).min(matching.len());
        let items = matching[offset.min(end)..end]
            .iter()
            .map(|raw| (*raw).clone())
            .collect();

        let next_cursor = if end < matching.len() {
            if self.empty_page_after == Some(page_number) {
                Some(format!("empty:{}", end))
            } else {
                Some(end.to_string())
            }
        } else {
            None
        };

        Ok(Page { items, next_cursor })
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

fn parse_cursor(path: &str, cursor: &str) -> Result<usize> {
    cursor.parse().map_err(|_| {
        StoreError::Query {
            path: path.to_string(),
            reason: format!("invalid cursor '{}'", cursor),
        }
        .into()
    })
}
