use tokio::net::TcpListener;

use sbl_session::InMemorySessionStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// SBL session server.
pub struct SblServer {
    config: ServerConfig,
}

impl SblServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router backed by a fresh in-memory store (useful for
    /// testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(self.store()))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("SBL server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }

    fn store(&self) -> InMemorySessionStore {
        match self.config.max_sessions {
            Some(limit) => InMemorySessionStore::with_capacity_limit(limit),
            None => InMemorySessionStore::new(),
        }
    }
}
