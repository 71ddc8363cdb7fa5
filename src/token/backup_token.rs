// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Backup token: base ledger plus signature-authorized emergency transfers.
//!
//! ## Emergency transfer
//!
//! Anyone may submit `(account, backupAddress, [amount,] v, r, s)`. The
//! checks run in a fixed order and the first failure is reported:
//!
//! 1. `backupAddress` is the account's registered backup -> `Invalid backup address`
//! 2. `backupAddress` never received an emergency transfer -> `Recipient is blacklisted`
//! 3. the EIP-712 signature recovers to `account` -> `Invalid signature`
//! 4. the ledger moves the funds -> ledger error, e.g. `transfer amount exceeds balance`
//! 5. `backupAddress` is blacklisted as a recipient
//!
//! Steps 1-3 only read state and step 4 fails without side effects, so a
//! rejected call never changes anything.

use alloy::primitives::{Address, B256, U256};
use tracing::{debug, info};

use crate::blockchain::{
    recover_signer, AuthorizationMessage, SchemaVersion, SplitSignature, TokenDomain,
};

use super::events::{EventJournal, TokenEvent, TokenEventKind};
use super::guard::RecipientGuard;
use super::ledger::{Balances, Ledger, LedgerError};
use super::registry::{BackupRegistry, RegistryError};

/// Why an emergency transfer was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    #[error("Invalid backup address")]
    InvalidBackupAddress,

    #[error("Recipient is blacklisted")]
    RecipientBlacklisted,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Outcome of a committed emergency transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub account: Address,
    pub backup_address: Address,
    pub amount: U256,
    pub schema: SchemaVersion,
}

/// Token state: ledger, backup registry, recipient guard and event journal.
///
/// Mutating operations take `&mut self` and complete synchronously, so the
/// caller's exclusive borrow (or write lock) is the unit of atomicity.
#[derive(Debug, Clone)]
pub struct BackupToken<L = Balances> {
    domain: TokenDomain,
    separator: B256,
    ledger: L,
    registry: BackupRegistry,
    guard: RecipientGuard,
    journal: EventJournal,
}

impl BackupToken<Balances> {
    /// New token with `initial_supply` minted to `deployer`.
    pub fn new(domain: TokenDomain, deployer: Address, initial_supply: U256) -> Self {
        Self::with_ledger(domain, Balances::with_initial_supply(deployer, initial_supply))
    }
}

impl<L: Ledger> BackupToken<L> {
    pub fn with_ledger(domain: TokenDomain, ledger: L) -> Self {
        Self {
            domain,
            separator: domain.separator(),
            ledger,
            registry: BackupRegistry::new(),
            guard: RecipientGuard::new(),
            journal: EventJournal::new(),
        }
    }

    pub fn domain(&self) -> &TokenDomain {
        &self.domain
    }

    pub fn domain_separator(&self) -> B256 {
        self.separator
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.ledger.balance_of(account)
    }

    pub fn total_supply(&self) -> U256 {
        self.ledger.total_supply()
    }

    pub fn events(&self) -> &[TokenEvent] {
        self.journal.events()
    }

    pub fn events_since(&self, offset: usize) -> &[TokenEvent] {
        self.journal.since(offset)
    }

    /// Register (or replace) `caller`'s backup address.
    ///
    /// Re-registering an address that was already used as a recipient is
    /// allowed but does not make it usable again.
    pub fn register_backup_address(
        &mut self,
        caller: Address,
        backup_address: Address,
    ) -> Result<(), RegistryError> {
        let previous = self.registry.register(caller, backup_address)?;

        if self.guard.is_used(backup_address) {
            debug!(
                owner = %caller,
                backup_address = %backup_address,
                "Registered backup address is already blacklisted"
            );
        }

        self.journal.record(TokenEventKind::BackupAddressRegistered {
            owner: caller,
            backup_address,
            previous,
        });
        info!(owner = %caller, backup_address = %backup_address, "Backup address registered");
        Ok(())
    }

    pub fn backup_address_of(&self, owner: Address) -> Option<Address> {
        self.registry.backup_address_of(owner)
    }

    /// Whether `address` already received an emergency transfer.
    pub fn is_blacklisted(&self, address: Address) -> bool {
        self.guard.is_used(address)
    }

    /// Schema V1: move the whole balance of `account` to its backup address.
    pub fn transfer_via_signature(
        &mut self,
        account: Address,
        backup_address: Address,
        v: u8,
        r: B256,
        s: B256,
    ) -> Result<TransferReceipt, TransferError> {
        self.execute_authorization(
            AuthorizationMessage::full(account, backup_address),
            SplitSignature::new(v, r, s),
        )
    }

    /// Schema V2: move `amount` from `account` to its backup address.
    pub fn transfer_via_signature_amount(
        &mut self,
        account: Address,
        backup_address: Address,
        amount: U256,
        v: u8,
        r: B256,
        s: B256,
    ) -> Result<TransferReceipt, TransferError> {
        self.execute_authorization(
            AuthorizationMessage::partial(account, backup_address, amount),
            SplitSignature::new(v, r, s),
        )
    }

    /// Validate `signature` over `message` and, if everything checks out,
    /// perform the emergency transfer.
    pub fn execute_authorization(
        &mut self,
        message: AuthorizationMessage,
        signature: SplitSignature,
    ) -> Result<TransferReceipt, TransferError> {
        let account = message.account();
        let backup_address = message.backup_address();

        if self.registry.backup_address_of(account) != Some(backup_address) {
            return Err(TransferError::InvalidBackupAddress);
        }

        if self.guard.is_used(backup_address) {
            return Err(TransferError::RecipientBlacklisted);
        }

        match recover_signer(self.separator, &message, &signature) {
            Ok(signer) if signer == account => {}
            Ok(signer) => {
                debug!(account = %account, recovered = %signer, "Signer does not match account");
                return Err(TransferError::InvalidSignature);
            }
            Err(e) => {
                debug!(account = %account, error = %e, "Malformed signature");
                return Err(TransferError::InvalidSignature);
            }
        }

        let amount = message
            .amount()
            .unwrap_or_else(|| self.ledger.balance_of(account));
        self.ledger.transfer_internal(account, backup_address, amount)?;

        let newly_used = self.guard.mark_used(backup_address);
        debug_assert!(newly_used, "guard checked before transfer");

        let schema = message.schema();
        self.journal.record(TokenEventKind::EmergencyTransfer {
            account,
            backup_address,
            amount,
            schema,
        });
        info!(
            account = %account,
            backup_address = %backup_address,
            amount = %amount,
            schema = %schema,
            "Emergency transfer executed"
        );

        Ok(TransferReceipt {
            account,
            backup_address,
            amount,
            schema,
        })
    }
}
