// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Base fungible-token ledger.
//!
//! The emergency-transfer logic only needs balance lookups and a privileged
//! internal transfer that fails without partial debit or credit. [`Ledger`]
//! is that seam; [`Balances`] is the in-memory implementation the service
//! runs on.

use std::collections::HashMap;

use alloy::primitives::{Address, U256};

/// Errors reported by the base ledger. Messages are surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("transfer from the zero address")]
    TransferFromZero,

    #[error("transfer to the zero address")]
    TransferToZero,

    #[error("transfer amount exceeds balance")]
    InsufficientBalance { balance: U256, needed: U256 },
}

/// Balance storage and internal transfer primitive.
pub trait Ledger {
    fn balance_of(&self, account: Address) -> U256;

    fn total_supply(&self) -> U256;

    /// Move `amount` from `from` to `to`, bypassing allowances.
    ///
    /// On error nothing has been debited or credited.
    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256)
        -> Result<(), LedgerError>;
}

/// In-memory balances with a fixed supply minted at construction.
#[derive(Debug, Clone, Default)]
pub struct Balances {
    balances: HashMap<Address, U256>,
    total_supply: U256,
}

impl Balances {
    /// Mint `supply` to `holder`.
    pub fn with_initial_supply(holder: Address, supply: U256) -> Self {
        let mut balances = HashMap::new();
        if !supply.is_zero() {
            balances.insert(holder, supply);
        }
        Self {
            balances,
            total_supply: supply,
        }
    }
}

impl Ledger for Balances {
    fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    fn total_supply(&self) -> U256 {
        self.total_supply
    }

    fn transfer_internal(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        if from == Address::ZERO {
            return Err(LedgerError::TransferFromZero);
        }
        if to == Address::ZERO {
            return Err(LedgerError::TransferToZero);
        }

        let from_balance = self.balance_of(from);
        if from_balance < amount {
            return Err(LedgerError::InsufficientBalance {
                balance: from_balance,
                needed: amount,
            });
        }

        // Debit before credit so a self-transfer nets to zero.
        self.balances.insert(from, from_balance - amount);
        *self.balances.entry(to).or_default() += amount;
        Ok(())
    }
}
