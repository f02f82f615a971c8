// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity resolution trait for the Authorization header.

use async_trait::async_trait;

use crate::error::VxChatError;
use crate::types::UserId;

/// Adapter that maps an Authorization header value to a user id.
///
/// The shipped implementation returns a configured sentinel id without
/// inspecting the header; a real deployment would decode and verify a
/// JWT here.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolves the raw header value to the calling user's id.
    async fn resolve(&self, auth_header: &str) -> Result<UserId, VxChatError>;
}
