//! # srmock server
//!
//! HTTP face of the in-memory schema registry, wire-compatible with the
//! common registry protocol:
//!
//! - `POST /subjects/{subject}/versions` — register a schema, returns `{"id": n}`
//! - `GET /subjects/{subject}/versions/{version}` — full record, or 404/40401
//! - `GET /schemas/ids/{id}` — schema content only, or 404/40403
//! - `GET /schemas/ids/{id}/versions` — all subject-versions sharing an id
//!
//! Built for test harnesses that need a registry endpoint without running a
//! real one: spawn a server on an ephemeral port, point the code under test
//! at it, and let the handle tear it down on drop.
//!
//! ## Example
//!
//! ```rust,ignore
//! use srmock_server::RegistryServer;
//!
//! let handle = RegistryServer::new().spawn().await?;
//! let client = my_registry_client(handle.url());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// HTTP server wrapping a fresh in-memory schema store.
///
/// Each server owns its own store; separate instances share nothing.
#[derive(Debug, Default)]
pub struct RegistryServer {
    state: Arc<AppState>,
}

impl RegistryServer {
    /// Creates a server around an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared state, for harnesses that want to inspect or pre-seed the
    /// store directly instead of going through HTTP.
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Builds the protocol router with request tracing enabled.
    pub fn router(&self) -> Router {
        create_router(self.state.clone()).layer(TraceLayer::new_for_http())
    }

    /// Serves on the given address until the future is dropped.
    pub async fn run(self, addr: impl Into<SocketAddr>) -> std::io::Result<()> {
        let addr = addr.into();
        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "schema registry listening");
        axum::serve(listener, self.router()).await
    }

    /// Binds an ephemeral localhost port and serves on a background task.
    ///
    /// The returned handle carries the bound address and aborts the server
    /// task when dropped.
    pub async fn spawn(self) -> std::io::Result<ServerHandle> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
        let addr = listener.local_addr()?;
        let router = self.router();

        let task = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, router).await {
                error!(%err, "schema registry server exited");
            }
        });

        info!(%addr, "schema registry listening");
        Ok(ServerHandle { addr, task })
    }
}

/// Handle to a spawned registry server.
#[derive(Debug)]
pub struct ServerHandle {
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl ServerHandle {
    /// The bound socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL for HTTP clients, e.g. `http://127.0.0.1:49321`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
