//! Axum-based HTTP gateway serving jokes as JSON.
//!
//! ## URL layout
//!
//! ```text
//! POST /api/joke             — stateless one-shot joke
//! POST /api/agent-joke       — hosted agent, optional session continuity
//! POST /api/comedian         — the in-memory ComedianBot
//! POST /api/comedian/reset   — start a new ComedianBot routine
//! ```
//!
//! Every route answers other methods with `405` and a JSON error body.

mod api;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use comedian_core::{Error, ModelClient};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use crate::Comedian;

/// Settings of the gateway.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Model used by the one-shot endpoint and the ComedianBot.
    pub model: String,
    /// Hosted agent used when a request names none.
    pub default_agent_id: Option<String>,
}

/// Router state injected into every handler.
///
/// Cheap to clone; all fields are reference-counted.
#[derive(Clone)]
pub struct AppState {
    model_client: ModelClient,
    model: Arc<str>,
    default_agent_id: Option<Arc<str>>,
    // One routine shared by all callers; the mutex keeps turns in order.
    comedian: Arc<Mutex<Comedian>>,
}

impl AppState {
    /// Creates the state, building the ComedianBot up front.
    pub fn new(
        model_client: ModelClient,
        config: ServerConfig,
    ) -> Result<Self, Error> {
        let comedian = Comedian::new(model_client.clone(), &config.model)?;
        Ok(Self {
            model_client,
            model: Arc::from(config.model),
            default_agent_id: config
                .default_agent_id
                .map(|id| id.trim().to_owned())
                .filter(|id| !id.is_empty())
                .map(Arc::from),
            comedian: Arc::new(Mutex::new(comedian)),
        })
    }
}

/// Builds the router with all API routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/joke", post(api::joke).fallback(api::method_not_allowed))
        .route(
            "/api/agent-joke",
            post(api::agent_joke).fallback(api::method_not_allowed),
        )
        .route(
            "/api/comedian",
            post(api::comedian).fallback(api::method_not_allowed),
        )
        .route(
            "/api/comedian/reset",
            post(api::comedian_reset).fallback(api::method_not_allowed),
        )
        .with_state(state)
}

/// Serves the gateway until Ctrl+C.
pub async fn serve(bind_addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_addr).await?;
    info!("gateway listening on {}", listener.local_addr()?);
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutting down gateway");
        })
        .await
}
