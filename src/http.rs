//! HTTP transport for the MCP endpoint

use std::net::SocketAddr;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::mcp::{Dispatcher, McpHandler, RawResponse, REGISTRY};

/// Path the JSON-RPC endpoint is mounted on
pub const MCP_PATH: &str = "/api/mcp";

/// HTTP server wrapping a [`Dispatcher`]
pub struct HttpServer {
    dispatcher: Dispatcher,
    addr: SocketAddr,
    cors: bool,
}

impl HttpServer {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(config.version_policy),
            addr: config.bind,
            cors: config.cors,
        }
    }

    /// Build the router
    pub fn router(dispatcher: Dispatcher, cors: bool) -> Router {
        let app = Router::new()
            .route(MCP_PATH, post(mcp_handler))
            .route("/health", get(health_handler))
            .with_state(dispatcher)
            .layer(TraceLayer::new_for_http());

        if cors {
            app.layer(CorsLayer::permissive())
        } else {
            app
        }
    }

    /// Start the server and run until Ctrl-C
    pub async fn start(self) -> std::io::Result<()> {
        let app = Self::router(self.dispatcher, self.cors);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!("MCP endpoint listening on http://{}{}", self.addr, MCP_PATH);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

/// JSON-RPC endpoint; the body is read raw so malformed JSON still gets an envelope
async fn mcp_handler(State(dispatcher): State<Dispatcher>, body: Bytes) -> RawResponse {
    dispatcher.handle_raw(&body)
}

/// Health check endpoint
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "tools": REGISTRY.len(),
    }))
}

impl IntoResponse for RawResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, self.body).into_response();

        for (name, value) in &self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => tracing::warn!("Dropping invalid response header {}", name),
            }
        }

        response
    }
}
