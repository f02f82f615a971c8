// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the VxChat REST API.
//!
//! Handles POST /api/auth/login, POST /api/chat, and the
//! /api/chatbot/chat + /api/chatbot/history group.
//!
//! Request DTOs keep their fields `Option` and validate explicitly so a
//! missing field answers 400 in the endpoint group's own error envelope
//! rather than the framework's 422 rejection.

use axum::{
    extract::State,
    http::HeaderMap,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vxchat_auth::issue_mock_token;
use vxchat_core::{ChatExchange, Role, UserId};

use crate::error::{ApiError, ChatbotError};
use crate::server::GatewayState;

/// Synthetic account id in login responses. The mock verifier has no
/// user records, so every login reports the same id.
const SYNTHETIC_LOGIN_ID: i64 = 1;

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// Request body for POST /api/auth/login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Response body for POST /api/auth/login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Synthetic account id.
    pub id: i64,
    /// The username as submitted.
    pub username: String,
    /// Derived address: `<username>@example.com`.
    pub email: String,
    /// Role derived from the username.
    pub role: Role,
    /// Fresh mock token; opaque, never validated anywhere.
    pub token: String,
}

/// POST /api/auth/login
///
/// Verifies the credential pair and answers with the account summary
/// plus a fresh mock token, or 401 with a generic message.
pub async fn post_login(
    State(state): State<GatewayState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let username = body
        .username
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::Validation("username is required".to_string()))?;
    let password = body
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::Validation("password is required".to_string()))?;

    tracing::info!(username, "login attempt");

    let role = state.verifier.verify(&username, &password).await?;

    Ok(Json(LoginResponse {
        id: SYNTHETIC_LOGIN_ID,
        email: format!("{username}@example.com"),
        role,
        token: issue_mock_token(),
        username,
    }))
}

// ---------------------------------------------------------------------------
// Stateless chat
// ---------------------------------------------------------------------------

/// Request body for POST /api/chat. `userId` is a free-form string here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Response body for POST /api/chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Canned reply from the service-desk rule table.
    pub response: String,
    /// Reply creation time.
    pub timestamp: DateTime<Utc>,
}

/// POST /api/chat
///
/// Stateless: generates a reply from the service-desk table and stores
/// nothing.
pub async fn post_chat(
    State(state): State<GatewayState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = body
        .message
        .ok_or_else(|| ApiError::Validation("message is required".to_string()))?;
    let user_id = body
        .user_id
        .ok_or_else(|| ApiError::Validation("userId is required".to_string()))?;

    tracing::info!(user_id, message, "chat message received");

    let response = state.service_desk.reply(&message);
    Ok(Json(ChatResponse {
        response,
        timestamp: Utc::now(),
    }))
}

// ---------------------------------------------------------------------------
// Chatbot (history-backed)
// ---------------------------------------------------------------------------

/// Request body for POST /api/chatbot/chat. `userId` is numeric here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatbotRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

/// Response body for POST /api/chatbot/chat.
#[derive(Debug, Serialize)]
pub struct ChatbotReply {
    pub success: bool,
    /// Canned reply from the workshop rule table.
    pub message: String,
    /// Timestamp of the recorded exchange.
    pub timestamp: DateTime<Utc>,
}

/// Response body for GET /api/chatbot/history.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    /// The full ordered history for the resolved user.
    pub data: Vec<ChatExchange>,
}

/// Response body for DELETE /api/chatbot/history.
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub success: bool,
    pub message: String,
}

/// Pull the Authorization header out of the request, requiring presence.
///
/// The value is not validated beyond UTF-8 -- identity resolution is the
/// resolver adapter's concern.
fn auth_header(headers: &HeaderMap) -> Result<&str, ChatbotError> {
    headers
        .get("authorization")
        .ok_or_else(|| ChatbotError::Validation("Authorization header is required".to_string()))?
        .to_str()
        .map_err(|_| ChatbotError::Validation("Authorization header must be valid UTF-8".to_string()))
}

/// POST /api/chatbot/chat
///
/// Generates a reply from the workshop table and records the exchange
/// under the user id from the request body. Writes key by the body id;
/// reads and clears key by the resolver-derived id.
pub async fn post_chatbot_chat(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    Json(body): Json<ChatbotRequest>,
) -> Result<Json<ChatbotReply>, ChatbotError> {
    auth_header(&headers)?;

    let message = body
        .message
        .ok_or_else(|| ChatbotError::Validation("message is required".to_string()))?;
    let user_id = body
        .user_id
        .ok_or_else(|| ChatbotError::Validation("userId is required".to_string()))?;

    let response = state.workshop.reply(&message);
    let exchange = ChatExchange {
        id: state.history.next_id(),
        user_id,
        message,
        response: response.clone(),
        timestamp: Utc::now(),
    };
    let timestamp = exchange.timestamp;
    state.history.append(user_id, exchange);

    Ok(Json(ChatbotReply {
        success: true,
        message: response,
        timestamp,
    }))
}

/// GET /api/chatbot/history
///
/// Returns the full history for the user the resolver derives from the
/// Authorization header.
pub async fn get_chatbot_history(
    State(state): State<GatewayState>,
    headers: HeaderMap,
) -> Result<Json<HistoryResponse>, ChatbotError> {
    let header = auth_header(&headers)?;
    let user_id = state.identity.resolve(header).await?;

    Ok(Json(HistoryResponse {
        success: true,
        data: state.history.get(user_id),
    }))
}

/// DELETE /api/chatbot/history
///
/// Clears the resolved user's history. Idempotent.
pub async fn delete_chatbot_history(
    State(state): State<GatewayState>,
    headers: HeaderMap,
) -> Result<Json<ClearResponse>, ChatbotError> {
    let header = auth_header(&headers)?;
    let user_id = state.identity.resolve(header).await?;

    state.history.clear(user_id);

    Ok(Json(ClearResponse {
        success: true,
        message: "Chat history cleared successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_deserializes_with_both_fields() {
        let json = r#"{"username": "admin", "password": "admin123"}"#;
        let req: LoginRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.username.as_deref(), Some("admin"));
        assert_eq!(req.password.as_deref(), Some("admin123"));
    }

    #[test]
    fn login_request_tolerates_missing_fields() {
        let req: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(req.username.is_none());
        assert!(req.password.is_none());
    }

    #[test]
    fn chat_request_reads_camel_case_user_id() {
        let json = r#"{"message": "hi", "userId": "u1"}"#;
        let req: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.message.as_deref(), Some("hi"));
        assert_eq!(req.user_id.as_deref(), Some("u1"));
    }

    #[test]
    fn chatbot_request_user_id_is_numeric() {
        let json = r#"{"message": "hello", "userId": 1}"#;
        let req: ChatbotRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.user_id, Some(1));
    }

    #[test]
    fn login_response_serializes_flat_object() {
        let resp = LoginResponse {
            id: 1,
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            role: Role::Admin,
            token: "mock-jwt-token-123".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"role\":\"ADMIN\""));
        assert!(json.contains("admin@example.com"));
        assert!(json.contains("mock-jwt-token-123"));
    }

    #[test]
    fn history_response_serializes_empty_data() {
        let resp = HistoryResponse {
            success: true,
            data: vec![],
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"data\":[]"));
    }

    #[test]
    fn missing_authorization_header_is_a_validation_error() {
        let headers = HeaderMap::new();
        let err = auth_header(&headers).unwrap_err();
        assert!(matches!(err, ChatbotError::Validation(_)));
    }

    #[test]
    fn present_authorization_header_passes_through() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer whatever".parse().unwrap());
        assert_eq!(auth_header(&headers).unwrap(), "Bearer whatever");
    }
}
