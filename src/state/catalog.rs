//! Catalog page load state.
//!
//! DESIGN
//! ======
//! Items are stored exactly as received, nulls included. Filtering belongs to
//! the grid so every consumer sees the same source list.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::api::ApiError;
use crate::net::types::CatalogItem;

/// Items for the catalog grid plus request status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub items: Vec<Option<CatalogItem>>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CatalogState {
    /// Mark a request as in flight, clearing any earlier error.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a finished request. Failures keep previously loaded items.
    pub fn finish_load(&mut self, result: Result<Vec<Option<CatalogItem>>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}
