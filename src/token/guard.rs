// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Replay guard keyed on backup address.
//!
//! A backup address that has received one emergency transfer is
//! blacklisted as a recipient for good, whichever owner registers it next.

use std::collections::HashSet;

use alloy::primitives::Address;

/// Append-only set of backup addresses already used as recipients.
#[derive(Debug, Clone, Default)]
pub struct RecipientGuard {
    used: HashSet<Address>,
}

impl RecipientGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_used(&self, address: Address) -> bool {
        self.used.contains(&address)
    }

    /// Returns `false` if the address was already marked.
    pub fn mark_used(&mut self, address: Address) -> bool {
        self.used.insert(address)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
