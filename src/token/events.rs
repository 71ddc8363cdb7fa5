// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Journal of committed token state transitions.
//!
//! Every successful registration and emergency transfer appends one
//! entry. Rejected calls leave no trace here; they are only logged.

use alloy::primitives::{Address, U256};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::blockchain::SchemaVersion;

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenEventKind {
    BackupAddressRegistered {
        owner: Address,
        backup_address: Address,
        previous: Option<Address>,
    },
    EmergencyTransfer {
        account: Address,
        backup_address: Address,
        amount: U256,
        schema: SchemaVersion,
    },
}

/// A journal entry.
#[derive(Debug, Clone)]
pub struct TokenEvent {
    /// Unique event ID.
    pub event_id: Uuid,
    /// When the event was committed.
    pub timestamp: DateTime<Utc>,
    pub kind: TokenEventKind,
}

impl TokenEvent {
    pub fn new(kind: TokenEventKind) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind,
        }
    }
}

/// Append-only, in-order event list.
#[derive(Debug, Clone, Default)]
pub struct EventJournal {
    events: Vec<TokenEvent>,
}

impl EventJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: TokenEventKind) -> &TokenEvent {
        self.events.push(TokenEvent::new(kind));
        &self.events[self.events.len() - 1]
    }

    pub fn events(&self) -> &[TokenEvent] {
        &self.events
    }

    /// Events recorded after the first `offset` entries.
    pub fn since(&self, offset: usize) -> &[TokenEvent] {
        self.events.get(offset..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
