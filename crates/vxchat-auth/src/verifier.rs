// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-table credential verification.
//!
//! No hashing, no rate limiting, no lockout: this is test scaffolding
//! with exact-match semantics so results are reproducible. A production
//! deployment replaces this adapter behind the `CredentialVerifier`
//! trait without touching handler code.

use async_trait::async_trait;

use vxchat_core::{CredentialVerifier, Role, VxChatError};

/// The static credential table. Matching is exact and case-sensitive.
const CREDENTIALS: &[(&str, &str)] = &[
    ("admin", "admin123"),
    ("customer", "customer123"),
    ("employee", "employee123"),
];

/// Derive a role from the username alone.
///
/// A username containing "admin" (case-insensitive) is an admin,
/// "employee" an employee, anything else a customer. Applied to the
/// login response for every verified account.
pub fn derive_role(username: &str) -> Role {
    let lower = username.to_lowercase();
    if lower.contains("admin") {
        Role::Admin
    } else if lower.contains("employee") {
        Role::Employee
    } else {
        Role::Customer
    }
}

/// Credential verifier backed by the fixed table.
#[derive(Debug, Default)]
pub struct FixedCredentialVerifier;

#[async_trait]
impl CredentialVerifier for FixedCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> Result<Role, VxChatError> {
        let known = CREDENTIALS
            .iter()
            .any(|&(user, pass)| user == username && pass == password);
        if known {
            Ok(derive_role(username))
        } else {
            tracing::debug!(username, "credential verification failed");
            Err(VxChatError::InvalidCredentials)
        }
    }
}
