// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Owner -> backup address registry.

use std::collections::HashMap;

use alloy::primitives::Address;

use crate::blockchain::is_zero_address;

/// Registration failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Backup address cannot be the zero address")]
    ZeroAddress,
}

/// At most one backup address per owner; re-registration overwrites.
#[derive(Debug, Clone, Default)]
pub struct BackupRegistry {
    backups: HashMap<Address, Address>,
}

impl BackupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `backup` for `owner`, returning the address it replaced.
    pub fn register(
        &mut self,
        owner: Address,
        backup: Address,
    ) -> Result<Option<Address>, RegistryError> {
        if is_zero_address(&backup) {
            return Err(RegistryError::ZeroAddress);
        }
        Ok(self.backups.insert(owner, backup))
    }

    pub fn backup_address_of(&self, owner: Address) -> Option<Address> {
        self.backups.get(&owner).copied()
    }

    pub fn len(&self) -> usize {
        self.backups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backups.is_empty()
    }
}
