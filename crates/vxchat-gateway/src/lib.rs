// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the VxChat backend.
//!
//! Exposes the REST API:
//!
//! - `POST /api/auth/login` -- mock credential verification
//! - `POST /api/chat` -- stateless service-desk replies
//! - `POST /api/chatbot/chat` -- workshop replies with per-user history
//! - `GET /api/chatbot/history` -- fetch the caller's history
//! - `DELETE /api/chatbot/history` -- clear the caller's history

pub mod error;
pub mod handlers;
pub mod server;

pub use error::{ApiError, ChatbotError};
pub use server::{cors_layer, router, start_server, GatewayState, ServerSettings};
