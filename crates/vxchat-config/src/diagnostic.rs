// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy match suggestions.
//!
//! Converts Figment deserialization errors into miette diagnostics with
//! valid key listings and "did you mean?" suggestions using Jaro-Winkler
//! string similarity.

use miette::Diagnostic;
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
/// 0.75 catches common typos like `prot` -> `port` while filtering noise.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with diagnostic context.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(vxchat::config::unknown_key),
        help("{}", format_unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        /// The unrecognized key name.
        key: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
        /// List of valid keys for the section.
        valid_keys: String,
    },

    /// A configuration value has the wrong type.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(vxchat::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        /// The key with the wrong type.
        key: String,
        /// Description of the type mismatch.
        detail: String,
        /// What type was expected.
        expected: String,
    },

    /// A validation error for a config value.
    #[error("validation error: {message}")]
    #[diagnostic(code(vxchat::config::validation))]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    /// Catch-all for other configuration errors.
    #[error("configuration error: {0}")]
    #[diagnostic(code(vxchat::config::other))]
    Other(String),
}

/// Format the help message for unknown key errors.
fn format_unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid keys: {valid_keys}"),
        None => format!("valid keys: {valid_keys}"),
    }
}

/// Suggest the closest valid key to `input`, if any is similar enough.
pub fn suggest_key(input: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|candidate| (candidate, strsim::jaro_winkler(input, candidate)))
        .filter(|&(_, score)| score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, _)| candidate.to_string())
}

/// Convert a `figment::Error` into a list of `ConfigError` diagnostics.
///
/// A figment error may carry multiple underlying errors; each is
/// converted, with fuzzy suggestions attached to unknown-field errors.
pub fn figment_to_config_errors(err: figment::Error) -> Vec<ConfigError> {
    use figment::error::Kind;

    let mut errors = Vec::new();

    for error in err {
        let key_path = error.path.join(".");
        let config_error = match &error.kind {
            Kind::UnknownField(field, expected) => {
                let valid_keys: Vec<&str> = expected.to_vec();
                let suggestion = suggest_key(field, &valid_keys);
                ConfigError::UnknownKey {
                    key: field.clone(),
                    suggestion,
                    valid_keys: valid_keys.join(", "),
                }
            }
            Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                key: key_path,
                detail: format!("found {actual}"),
                expected: expected.clone(),
            },
            other => ConfigError::Other(other.to_string()),
        };
        errors.push(config_error);
    }

    errors
}

/// Render diagnostics to stderr via miette's fancy reporter.
pub fn render_errors(errors: &[ConfigError]) {
    for error in errors {
        let report = miette::Report::msg(format!("{error}"));
        let report = match error {
            ConfigError::UnknownKey {
                suggestion,
                valid_keys,
                ..
            } => report.wrap_err(format_unknown_key_help(suggestion.as_deref(), valid_keys)),
            _ => report,
        };
        eprintln!("{report:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_key_finds_close_typo() {
        let valid = ["host", "port"];
        assert_eq!(suggest_key("prot", &valid), Some("port".to_string()));
        assert_eq!(suggest_key("host", &valid), Some("host".to_string()));
    }

    #[test]
    fn suggest_key_rejects_distant_input() {
        let valid = ["host", "port"];
        assert_eq!(suggest_key("zzzzzz", &valid), None);
    }

    #[test]
    fn unknown_key_error_mentions_valid_keys() {
        let err = ConfigError::UnknownKey {
            key: "prot".to_string(),
            suggestion: Some("port".to_string()),
            valid_keys: "host, port".to_string(),
        };
        assert!(err.to_string().contains("prot"));
        assert!(format_unknown_key_help(Some("port"), "host, port").contains("did you mean"));
    }

    #[test]
    fn figment_unknown_field_converts_with_suggestion() {
        use figment::providers::{Format, Serialized, Toml};
        use figment::Figment;

        use crate::model::VxChatConfig;

        let err = Figment::new()
            .merge(Serialized::defaults(VxChatConfig::default()))
            .merge(Toml::string("[server]\nprot = 9"))
            .extract::<VxChatConfig>()
            .unwrap_err();

        let errors = figment_to_config_errors(err);
        assert!(!errors.is_empty());
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigError::UnknownKey { key, suggestion, .. }
                if key == "prot" && suggestion.as_deref() == Some("port")
        )));
    }
}
