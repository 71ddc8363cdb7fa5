// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! EIP-712 domain of the backup token.
//!
//! The domain binds every emergency-transfer signature to one token
//! instance on one chain. A signature produced for another chain id or
//! another verifying contract hashes to a different digest and therefore
//! recovers to an unrelated address; there is no dedicated "wrong network"
//! error.

use std::borrow::Cow;

use alloy::{
    primitives::{Address, B256, U256},
    sol_types::Eip712Domain,
};

/// EIP-712 domain name.
pub const DOMAIN_NAME: &str = "Backup Token";

/// EIP-712 domain version.
pub const DOMAIN_VERSION: &str = "1";

/// Deployment parameters that make up the token's EIP-712 domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenDomain {
    chain_id: u64,
    verifying_contract: Address,
}

impl TokenDomain {
    pub fn new(chain_id: u64, verifying_contract: Address) -> Self {
        Self {
            chain_id,
            verifying_contract,
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn verifying_contract(&self) -> Address {
        self.verifying_contract
    }

    /// The full `EIP712Domain` value (name, version, chainId, verifyingContract).
    pub fn eip712(&self) -> Eip712Domain {
        Eip712Domain::new(
            Some(Cow::Borrowed(DOMAIN_NAME)),
            Some(Cow::Borrowed(DOMAIN_VERSION)),
            Some(U256::from(self.chain_id)),
            Some(self.verifying_contract),
            None,
        )
    }

    /// `hashStruct(EIP712Domain)`, the domain separator.
    pub fn separator(&self) -> B256 {
        self.eip712().separator()
    }
}
