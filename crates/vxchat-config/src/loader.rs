// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./vxchat.toml` > `~/.config/vxchat/vxchat.toml`
//! > `/etc/vxchat/vxchat.toml`, with environment variable overrides via
//! the `VXCHAT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::VxChatConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/vxchat/vxchat.toml` (system-wide)
/// 3. `~/.config/vxchat/vxchat.toml` (user XDG config)
/// 4. `./vxchat.toml` (local directory)
/// 5. `VXCHAT_*` environment variables
pub fn load_config() -> Result<VxChatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VxChatConfig::default()))
        .merge(Toml::file("/etc/vxchat/vxchat.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("vxchat/vxchat.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("vxchat.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<VxChatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VxChatConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<VxChatConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VxChatConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so underscore-bearing
/// key names stay unambiguous: `VXCHAT_CHATBOT_DEFAULT_USER_ID` must map
/// to `chatbot.default_user_id`, not `chatbot.default.user.id`.
fn env_provider() -> Env {
    Env::prefixed("VXCHAT_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("service_", "service.", 1)
            .replacen("server_", "server.", 1)
            .replacen("cors_", "cors.", 1)
            .replacen("chatbot_", "chatbot.", 1);
        mapped.into()
    })
}
