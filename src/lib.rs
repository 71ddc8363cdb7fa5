// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Backup Token - Emergency Recovery Relayer
//!
//! A fungible token ledger where an owner pre-registers a backup address and
//! signs an EIP-712 `EmergencyTransfer` authorization off-line. Anyone may
//! relay that signature to move the owner's funds (all of them, or a signed
//! amount) to the backup address. Each backup address can receive an
//! emergency transfer once.
//!
//! ## Modules
//!
//! - `token` - ledger, backup registry, recipient guard and the orchestrator
//! - `blockchain` - EIP-712 domain, typed data, signing and signer recovery
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Bearer-token authentication for owner actions
//! - `config` - Environment configuration

pub mod api;
pub mod auth;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod token;

#[cfg(test)]
pub(crate) mod test_support;
