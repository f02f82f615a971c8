// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid hosts, well-formed origins, and sane ids.

use crate::diagnostic::ConfigError;
use crate::model::VxChatConfig;

const KNOWN_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &VxChatConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.server.port == 0 {
        errors.push(ConfigError::Validation {
            message: "server.port must be non-zero".to_string(),
        });
    }

    if config.cors.allowed_origins.is_empty() {
        errors.push(ConfigError::Validation {
            message: "cors.allowed_origins must list at least one origin".to_string(),
        });
    }
    for origin in &config.cors.allowed_origins {
        if !origin.starts_with("http://") && !origin.starts_with("https://") {
            errors.push(ConfigError::Validation {
                message: format!(
                    "cors.allowed_origins entry `{origin}` must start with http:// or https://"
                ),
            });
        }
    }

    if config.chatbot.default_user_id < 1 {
        errors.push(ConfigError::Validation {
            message: format!(
                "chatbot.default_user_id must be at least 1, got {}",
                config.chatbot.default_user_id
            ),
        });
    }

    if !KNOWN_LOG_LEVELS.contains(&config.service.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "service.log_level `{}` is not one of {}",
                config.service.log_level,
                KNOWN_LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
