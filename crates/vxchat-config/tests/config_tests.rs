// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the VxChat configuration system.

use vxchat_config::diagnostic::{suggest_key, ConfigError};
use vxchat_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_vxchat_config() {
    let toml = r#"
[service]
name = "test-service"
log_level = "debug"

[server]
host = "0.0.0.0"
port = 9090

[cors]
allowed_origins = ["http://localhost:5173"]

[chatbot]
default_user_id = 2
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.service.name, "test-service");
    assert_eq!(config.service.log_level, "debug");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.cors.allowed_origins, vec!["http://localhost:5173"]);
    assert_eq!(config.chatbot.default_user_id, 2);
}

/// Missing sections use defaults without error.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.service.name, "vxchat");
    assert_eq!(config.service.log_level, "info");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(
        config.cors.allowed_origins,
        vec!["http://localhost:3000", "http://localhost:3001"]
    );
    assert_eq!(config.chatbot.default_user_id, 1);
}

/// Unknown keys produce an error rather than being ignored.
#[test]
fn unknown_field_produces_error() {
    let toml = r#"
[server]
hsot = "0.0.0.0"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("hsot"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Validation errors surface through `load_and_validate_str`.
#[test]
fn invalid_origin_fails_validation() {
    let toml = r#"
[cors]
allowed_origins = ["localhost:3000"]
"#;

    let errors = load_and_validate_str(toml).expect_err("bad origin should fail validation");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::Validation { message } if message.contains("allowed_origins")
    )));
}

/// Valid content passes the combined load-and-validate path.
#[test]
fn load_and_validate_accepts_good_config() {
    let config = load_and_validate_str(
        r#"
[server]
port = 4000
"#,
    )
    .expect("should load and validate");
    assert_eq!(config.server.port, 4000);
}

/// Typos against the model's keys get a suggestion.
#[test]
fn suggest_key_offers_correction() {
    assert_eq!(
        suggest_key("defult_user_id", &["default_user_id"]),
        Some("default_user_id".to_string())
    );
}
