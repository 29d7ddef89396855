// ABOUTME: Shared application state for the tallybook HTTP server.
// ABOUTME: Holds the one RecordStore constructed at startup and handed to every handler.

use std::sync::Arc;

use tallybook_store::RecordStore;

/// Shared application state accessible by all Axum handlers.
pub struct AppState {
    pub store: RecordStore,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}
