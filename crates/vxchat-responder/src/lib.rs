// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic keyword-rule reply generation.
//!
//! Maps free-text input to canned replies via ordered substring
//! matching. No network, no model, no latency -- just a decision table
//! per endpoint.

pub mod rule;
pub mod tables;

pub use rule::{Fallback, Rule, RuleTable};
pub use tables::{SERVICE_DESK, WORKSHOP};
