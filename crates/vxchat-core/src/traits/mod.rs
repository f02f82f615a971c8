// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.
//!
//! These are the seams where the mock implementations shipped in this
//! repository can be swapped for real collaborators (a user database, a
//! JWT verifier) without touching handler logic.

pub mod credential;
pub mod identity;

pub use credential::CredentialVerifier;
pub use identity::IdentityResolver;
