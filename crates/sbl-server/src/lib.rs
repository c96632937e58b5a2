//! HTTP server for the Shared Bill Ledger.
//!
//! Hosts bill-splitting sessions over HTTP: receipt upload, command-batch
//! application, and per-person summaries. All state is in memory — a restart
//! drops every session by design. The two external collaborators (receipt
//! recognizer, command interpreter) sit in front of this server; their JSON
//! output is what the endpoints consume.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::SblServer;
pub use state::AppState;
