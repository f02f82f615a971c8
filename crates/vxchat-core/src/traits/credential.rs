// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential verification trait.

use async_trait::async_trait;

use crate::error::VxChatError;
use crate::types::Role;

/// Adapter for validating a username/password pair.
///
/// The shipped implementation checks against a fixed table; a production
/// deployment would back this with a user store and password hashing.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verifies the pair and returns the account role on success.
    ///
    /// Failure is always `VxChatError::InvalidCredentials` -- the error
    /// never reveals which of the two fields was wrong.
    async fn verify(&self, username: &str, password: &str) -> Result<Role, VxChatError>;
}
