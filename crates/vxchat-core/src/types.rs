// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared between the adapter traits and the HTTP surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Numeric user identifier, matching the wire contract (`userId`).
pub type UserId = i64;

/// Role attached to an authenticated account.
///
/// Serialized in SCREAMING case (`"ADMIN"`), the shape the frontend
/// expects in the login response.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Employee,
    Customer,
}

/// One recorded message/response pair.
///
/// Immutable once created; owned by the history store entry for its user.
/// Field names serialize camelCase so the wire shape carries `userId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchange {
    /// Identifier unique across all exchanges, regardless of user.
    pub id: i64,
    /// The user the exchange is recorded under.
    pub user_id: UserId,
    /// The inbound message text, verbatim.
    pub message: String,
    /// The generated reply.
    pub response: String,
    /// Creation time (RFC 3339 on the wire).
    pub timestamp: DateTime<Utc>,
}
