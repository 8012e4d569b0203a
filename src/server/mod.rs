//! Web server exposing the suggestion engine.

pub mod http;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::engine::HabitSuggester;

/// Shared server state
#[derive(Clone)]
pub struct ServerState {
    pub suggester: Arc<HabitSuggester>,
    pub default_k: usize,
}

/// Build the application router.
pub fn router(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(http::index_page))
        .route("/suggest", post(http::suggest_handler))
        .route("/feedback", post(http::feedback_handler))
        .route("/api/status", get(http::status_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server. `host` and `port` override the configured
/// bind settings when given.
pub async fn start(host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = Config::load()?;
    let host = host.unwrap_or(config.server.host);
    let port = port.unwrap_or(config.server.port);

    let suggester = Arc::new(HabitSuggester::open(
        &config.store.rules_path,
        &config.store.learned_path,
    ));
    let state = ServerState {
        suggester,
        default_k: config.suggest.default_k,
    };

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let app = router(state);

    info!("Listening on http://{}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
