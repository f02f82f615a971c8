// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the VxChat backend.

use thiserror::Error;

/// The primary error type used across VxChat adapter traits and core operations.
#[derive(Debug, Error)]
pub enum VxChatError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Credential verification failed. Deliberately carries no detail about
    /// which field was wrong.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// A request was missing or carried malformed fields.
    #[error("validation error: {0}")]
    Validation(String),

    /// HTTP server errors (bind failure, accept loop failure).
    #[error("server error: {message}")]
    Server {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
