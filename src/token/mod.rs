// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Token State
//!
//! The backup token's state and its single state-transition entry point.
//!
//! ## Components
//!
//! - `ledger` - balances and the internal transfer primitive
//! - `registry` - owner -> backup address
//! - `guard` - backup addresses already used as emergency recipients
//! - `events` - journal of committed operations
//! - `backup_token` - the orchestrator tying them together

pub mod backup_token;
pub mod events;
pub mod guard;
pub mod ledger;
pub mod registry;

pub use backup_token::{BackupToken, TransferError, TransferReceipt};
pub use events::{EventJournal, TokenEvent, TokenEventKind};
pub use guard::RecipientGuard;
pub use ledger::{Balances, Ledger, LedgerError};
pub use registry::{BackupRegistry, RegistryError};
