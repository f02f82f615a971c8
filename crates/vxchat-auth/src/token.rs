// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock session token issuance.

use chrono::Utc;

/// Issue a fresh opaque token for a successful login.
///
/// The token has no verifiable structure and is never validated or
/// expired anywhere -- it only exists so the login response carries the
/// `token` field the frontend contract expects.
pub fn issue_mock_token() -> String {
    format!("mock-jwt-token-{}", Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_has_expected_prefix() {
        let token = issue_mock_token();
        assert!(token.starts_with("mock-jwt-token-"));
    }

    #[test]
    fn token_suffix_is_numeric() {
        let token = issue_mock_token();
        let suffix = token.strip_prefix("mock-jwt-token-").unwrap();
        assert!(suffix.parse::<i64>().is_ok());
    }
}
