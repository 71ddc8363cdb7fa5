// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! EIP-712 `EmergencyTransfer` message in its two schema versions.
//!
//! - **V1** `EmergencyTransfer(address account,address backupAddress)`:
//!   authorizes moving the account's entire balance.
//! - **V2** `EmergencyTransfer(address account,address backupAddress,uint256 tokenAmount)`:
//!   authorizes moving an explicit amount.
//!
//! The two versions have different type hashes, so a signature made under
//! one never validates under the other.

use std::fmt;

use alloy::{
    primitives::{keccak256, Address, B256, U256},
    sol_types::SolStruct,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::domain::TokenDomain;

/// Schema V1: full-balance authorization.
pub mod v1 {
    alloy::sol! {
        #[derive(Debug, PartialEq, Eq)]
        struct EmergencyTransfer {
            address account;
            address backupAddress;
        }
    }
}

/// Schema V2: explicit-amount authorization.
pub mod v2 {
    alloy::sol! {
        #[derive(Debug, PartialEq, Eq)]
        struct EmergencyTransfer {
            address account;
            address backupAddress;
            uint256 tokenAmount;
        }
    }
}

/// Which `EmergencyTransfer` schema a message was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    V1,
    V2,
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaVersion::V1 => write!(f, "v1"),
            SchemaVersion::V2 => write!(f, "v2"),
        }
    }
}

/// The structured payload an owner signs to authorize one emergency transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationMessage {
    /// V1: move the whole balance of `account`.
    Full {
        account: Address,
        backup_address: Address,
    },
    /// V2: move `amount` out of `account`.
    Partial {
        account: Address,
        backup_address: Address,
        amount: U256,
    },
}

impl AuthorizationMessage {
    pub fn full(account: Address, backup_address: Address) -> Self {
        Self::Full {
            account,
            backup_address,
        }
    }

    pub fn partial(account: Address, backup_address: Address, amount: U256) -> Self {
        Self::Partial {
            account,
            backup_address,
            amount,
        }
    }

    pub fn account(&self) -> Address {
        match self {
            Self::Full { account, .. } | Self::Partial { account, .. } => *account,
        }
    }

    pub fn backup_address(&self) -> Address {
        match self {
            Self::Full { backup_address, .. } | Self::Partial { backup_address, .. } => {
                *backup_address
            }
        }
    }

    /// The signed amount, `None` for V1 messages.
    pub fn amount(&self) -> Option<U256> {
        match self {
            Self::Full { .. } => None,
            Self::Partial { amount, .. } => Some(*amount),
        }
    }

    pub fn schema(&self) -> SchemaVersion {
        match self {
            Self::Full { .. } => SchemaVersion::V1,
            Self::Partial { .. } => SchemaVersion::V2,
        }
    }

    /// `hashStruct(message)` under the message's own schema.
    pub fn struct_hash(&self) -> B256 {
        match *self {
            Self::Full {
                account,
                backup_address,
            } => v1::EmergencyTransfer {
                account,
                backupAddress: backup_address,
            }
            .eip712_hash_struct(),
            Self::Partial {
                account,
                backup_address,
                amount,
            } => v2::EmergencyTransfer {
                account,
                backupAddress: backup_address,
                tokenAmount: amount,
            }
            .eip712_hash_struct(),
        }
    }

    /// The digest that gets signed: `keccak256(0x19 0x01 ‖ separator ‖ structHash)`.
    pub fn signing_hash(&self, domain: &TokenDomain) -> B256 {
        typed_data_digest(domain.separator(), self.struct_hash())
    }
}

/// Combine a domain separator and a struct hash into the EIP-712 digest.
pub fn typed_data_digest(domain_separator: B256, struct_hash: B256) -> B256 {
    let mut preimage = [0u8; 66];
    preimage[0] = 0x19;
    preimage[1] = 0x01;
    preimage[2..34].copy_from_slice(domain_separator.as_slice());
    preimage[34..66].copy_from_slice(struct_hash.as_slice());
    keccak256(preimage)
}
