use std::sync::Arc;

use sbl_session::InMemorySessionStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemorySessionStore>,
}

impl AppState {
    pub fn new(store: InMemorySessionStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
