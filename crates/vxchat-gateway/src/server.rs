// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Router assembly and server startup.
//!
//! Three sub-routers (auth, chat, chatbot) are merged into one app with
//! a shared [`GatewayState`] and a CORS layer built from configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use vxchat_core::{CredentialVerifier, IdentityResolver, VxChatError};
use vxchat_history::HistoryStore;
use vxchat_responder::RuleTable;

use crate::handlers;

/// Preflight cache lifetime advertised to browsers.
const CORS_MAX_AGE_SECS: u64 = 3600;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct GatewayState {
    /// Credential checking for the login endpoint.
    pub verifier: Arc<dyn CredentialVerifier>,
    /// Authorization-header-to-user-id mapping for the chatbot endpoints.
    pub identity: Arc<dyn IdentityResolver>,
    /// Per-user chatbot conversation history.
    pub history: Arc<HistoryStore>,
    /// Rule table answering /api/chat.
    pub service_desk: RuleTable,
    /// Rule table answering /api/chatbot/chat.
    pub workshop: RuleTable,
}

/// Listener address and CORS policy for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Exact origins allowed to call the API from a browser.
    pub allowed_origins: Vec<String>,
}

/// Build the CORS layer from the configured origin list.
///
/// Origins must parse as header values; a bad entry is a configuration
/// error, not something to skip silently.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, VxChatError> {
    let mut origins = Vec::with_capacity(allowed_origins.len());
    for origin in allowed_origins {
        let value = origin
            .parse::<HeaderValue>()
            .map_err(|_| VxChatError::Config(format!("invalid CORS origin: {origin}")))?;
        origins.push(value);
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(CORS_MAX_AGE_SECS)))
}

fn auth_routes() -> Router<GatewayState> {
    Router::new().route("/api/auth/login", post(handlers::post_login))
}

fn chat_routes() -> Router<GatewayState> {
    Router::new().route("/api/chat", post(handlers::post_chat))
}

fn chatbot_routes() -> Router<GatewayState> {
    Router::new()
        .route("/api/chatbot/chat", post(handlers::post_chatbot_chat))
        .route(
            "/api/chatbot/history",
            get(handlers::get_chatbot_history).delete(handlers::delete_chatbot_history),
        )
}

/// Assemble the full application router.
pub fn router(state: GatewayState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(chat_routes())
        .merge(chatbot_routes())
        .layer(cors)
        .with_state(state)
}

/// Bind the listener and serve until the process is stopped.
pub async fn start_server(settings: ServerSettings, state: GatewayState) -> Result<(), VxChatError> {
    let cors = cors_layer(&settings.allowed_origins)?;
    let app = router(state, cors);

    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| VxChatError::Server {
            message: format!("failed to bind {addr}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| VxChatError::Server {
            message: "server terminated unexpectedly".to_string(),
            source: Some(Box::new(e)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_layer_accepts_localhost_origins() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "http://localhost:3001".to_string(),
        ];
        assert!(cors_layer(&origins).is_ok());
    }

    #[test]
    fn cors_layer_rejects_unparseable_origin() {
        let origins = vec!["http://local\nhost".to_string()];
        let err = cors_layer(&origins).unwrap_err();
        assert!(matches!(err, VxChatError::Config(_)));
    }
}
