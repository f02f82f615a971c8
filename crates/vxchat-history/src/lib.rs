// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concurrent in-memory chat history for the VxChat backend.

pub mod store;

pub use store::HistoryStore;
