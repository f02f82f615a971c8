// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `vxchat serve` command implementation.
//!
//! Wires the mock auth adapters, the two rule tables, and the in-memory
//! history store into the gateway and runs it until the process stops.

use std::sync::Arc;

use tracing::info;

use vxchat_auth::{FixedCredentialVerifier, StaticIdentityResolver};
use vxchat_config::VxChatConfig;
use vxchat_core::VxChatError;
use vxchat_gateway::{start_server, GatewayState, ServerSettings};
use vxchat_history::HistoryStore;
use vxchat_responder::{SERVICE_DESK, WORKSHOP};

/// Runs the `vxchat serve` command.
pub async fn run_serve(config: VxChatConfig) -> Result<(), VxChatError> {
    init_tracing(&config.service.log_level);

    info!(service = config.service.name, "starting vxchat serve");

    let state = GatewayState {
        verifier: Arc::new(FixedCredentialVerifier),
        identity: Arc::new(StaticIdentityResolver::new(config.chatbot.default_user_id)),
        history: Arc::new(HistoryStore::new()),
        service_desk: SERVICE_DESK,
        workshop: WORKSHOP,
    };

    let settings = ServerSettings {
        host: config.server.host,
        port: config.server.port,
        allowed_origins: config.cors.allowed_origins,
    };

    start_server(settings, state).await
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vxchat={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
