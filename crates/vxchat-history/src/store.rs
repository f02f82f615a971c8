// SPDX-FileCopyrightText: 2026 VxChat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory history storage.
//!
//! Process-wide state: the store lives as long as the process and is
//! torn down with it. No eviction, no size bound, no persistence.

use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;

use vxchat_core::{ChatExchange, UserId};

/// Thread-safe mapping from user id to that user's ordered exchanges.
///
/// DashMap gives per-key locking for the per-user sequences; the id
/// counter is a separate atomic so ids stay unique across all users.
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: DashMap<UserId, Vec<ChatExchange>>,
    next_id: AtomicI64,
}

impl HistoryStore {
    /// Create an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Reserve the next exchange id, unique across all users.
    pub fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Append an exchange at the end of the user's sequence, creating
    /// the sequence if absent. Insertion order is chronological order.
    pub fn append(&self, user_id: UserId, exchange: ChatExchange) {
        self.entries.entry(user_id).or_default().push(exchange);
    }

    /// Return the user's full ordered history; empty if the user has none.
    pub fn get(&self, user_id: UserId) -> Vec<ChatExchange> {
        self.entries
            .get(&user_id)
            .map(|seq| seq.clone())
            .unwrap_or_default()
    }

    /// Remove the user's entry entirely. Clearing an absent user is a no-op.
    pub fn clear(&self, user_id: UserId) {
        self.entries.remove(&user_id);
    }
}
