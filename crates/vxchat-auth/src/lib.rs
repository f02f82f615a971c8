// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock authentication adapters for the VxChat backend.
//!
//! Implements the `CredentialVerifier` and `IdentityResolver` seams from
//! `vxchat-core` with a fixed credential table and a constant resolved
//! id, plus mock token issuance for login responses.

pub mod identity;
pub mod token;
pub mod verifier;

pub use identity::StaticIdentityResolver;
pub use token::issue_mock_token;
pub use verifier::{derive_role, FixedCredentialVerifier};
