// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error-to-response mapping for the two endpoint groups.
//!
//! The auth and stateless-chat endpoints answer failures with a
//! `{"message": ...}` envelope; the chatbot endpoints answer with
//! `{"success": false, "message": ...}`. Internal error detail is logged
//! server-side and never echoed to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use vxchat_core::VxChatError;

/// Generic client-facing text for internal failures.
const INTERNAL_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Error envelope for `/api/auth/*` and `/api/chat`.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    /// Error description.
    pub message: String,
}

/// Error envelope for `/api/chatbot/*`.
#[derive(Debug, Serialize)]
pub struct ChatbotErrorBody {
    /// Always `false` on the error path.
    pub success: bool,
    /// Error description.
    pub message: String,
}

/// Failures surfaced by the auth and stateless-chat handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad credentials. The client message never reveals which field was wrong.
    #[error("invalid credentials")]
    Unauthorized,

    /// Missing or malformed request fields.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unexpected failure; detail is logged, not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Invalid username or password".to_string(),
            ),
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(detail) => {
                tracing::error!(detail, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };
        (status, Json(MessageBody { message })).into_response()
    }
}

impl From<VxChatError> for ApiError {
    fn from(e: VxChatError) -> Self {
        match e {
            VxChatError::InvalidCredentials => ApiError::Unauthorized,
            VxChatError::Validation(message) => ApiError::Validation(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Failures surfaced by the chatbot handlers.
#[derive(Debug, Error)]
pub enum ChatbotError {
    /// Missing or malformed request fields or headers.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unexpected failure; detail is logged, not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ChatbotError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ChatbotError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ChatbotError::Internal(detail) => {
                tracing::error!(detail, "chatbot request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };
        (
            status,
            Json(ChatbotErrorBody {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

impl From<VxChatError> for ChatbotError {
    fn from(e: VxChatError) -> Self {
        match e {
            VxChatError::Validation(message) => ChatbotError::Validation(message),
            other => ChatbotError::Internal(other.to_string()),
        }
    }
}
