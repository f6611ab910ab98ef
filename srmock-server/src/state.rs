//! Shared handler state.

use srmock_registry::SchemaStore;

/// State shared by every request handler.
///
/// The handlers themselves are stateless; everything lives in the store.
#[derive(Debug, Default)]
pub struct AppState {
    /// The authoritative schema store.
    pub store: SchemaStore,
}

impl AppState {
    /// Creates state around a fresh, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}
