// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Shared fixtures for unit tests: well-known development keys and a
//! pre-funded token.

use alloy::{
    primitives::{address, Address, U256},
    signers::local::PrivateKeySigner,
};

use crate::blockchain::{
    sign_authorization, signer_from_hex, AuthorizationMessage, SplitSignature, TokenDomain,
};
use crate::token::{BackupToken, Ledger};

/// Development account #0, receives the initial supply.
pub const DEPLOYER_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
/// Development account #1, the account owner in most scenarios.
pub const OWNER_KEY: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
/// Development account #2.
pub const OTHER_KEY: &str = "5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a";

/// Address of the first contract deployed by account #0 on a fresh chain.
pub const TOKEN: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
pub const CHAIN_ID: u64 = 31337;
pub const INITIAL_SUPPLY: u64 = 10_000_000_000_000;

pub const BACKUP: Address = address!("15d34AAf54267DB7D7c367839AAf71A00a2C6A65");
pub const OTHER_BACKUP: Address = address!("9965507D1a55bcC2695C58ba16FB37d819B0A4dc");

pub fn signer(key: &str) -> PrivateKeySigner {
    signer_from_hex(key).unwrap()
}

pub fn domain() -> TokenDomain {
    TokenDomain::new(CHAIN_ID, TOKEN)
}

/// Fresh token whose deployer holds the initial supply.
pub fn token() -> BackupToken {
    BackupToken::new(domain(), signer(DEPLOYER_KEY).address(), U256::from(INITIAL_SUPPLY))
}

/// Token where `owner` already holds `balance`.
pub fn funded_token(owner: Address, balance: u64) -> BackupToken {
    let mut token = token();
    let deployer = signer(DEPLOYER_KEY).address();
    token
        .ledger_mut()
        .transfer_internal(deployer, owner, U256::from(balance))
        .unwrap();
    token
}

pub fn sign(
    key: &str,
    domain: &TokenDomain,
    message: &AuthorizationMessage,
) -> SplitSignature {
    sign_authorization(&signer(key), domain, message).unwrap()
}
