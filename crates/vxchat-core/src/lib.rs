// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the VxChat backend.
//!
//! Provides the error type, wire/domain types, and the adapter traits
//! the gateway composes. The mock adapters themselves live in
//! `vxchat-auth`; only the seams are defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::VxChatError;
pub use types::{ChatExchange, Role, UserId};

pub use traits::{CredentialVerifier, IdentityResolver};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vxchat_error_has_all_variants() {
        let _config = VxChatError::Config("test".into());
        let _creds = VxChatError::InvalidCredentials;
        let _validation = VxChatError::Validation("test".into());
        let _server = VxChatError::Server {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _internal = VxChatError::Internal("test".into());
    }

    #[test]
    fn invalid_credentials_message_is_generic() {
        // The display text is what ultimately reaches the client; it must
        // not name the failing field.
        let msg = VxChatError::InvalidCredentials.to_string();
        assert_eq!(msg, "invalid username or password");
        assert!(!msg.contains("field"));
    }

    #[test]
    fn trait_objects_are_send_sync() {
        fn _assert_verifier(_: &dyn CredentialVerifier) {}
        fn _assert_resolver(_: &dyn IdentityResolver) {}
    }
}
