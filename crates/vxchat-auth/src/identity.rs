// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stub identity resolution for the Authorization header.

use async_trait::async_trait;

use vxchat_core::{IdentityResolver, UserId, VxChatError};

/// Resolver that maps every Authorization header to one configured user.
///
/// Token parsing is stubbed; the sentinel id is injected from
/// configuration rather than hard-coded so a real token-decoding
/// resolver can replace this adapter wholesale.
#[derive(Debug, Clone)]
pub struct StaticIdentityResolver {
    user_id: UserId,
}

impl StaticIdentityResolver {
    /// Create a resolver that always yields `user_id`.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl IdentityResolver for StaticIdentityResolver {
    async fn resolve(&self, _auth_header: &str) -> Result<UserId, VxChatError> {
        Ok(self.user_id)
    }
}
