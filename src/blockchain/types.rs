// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain types and constants.

use alloy::primitives::{Address, B256};

/// Known network configuration, used to label a chain id.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: &'static str,
    /// Chain ID
    pub chain_id: u64,
}

/// Local development chain (Hardhat / Anvil default).
pub const LOCAL_DEV: NetworkConfig = NetworkConfig {
    name: "Local Development",
    chain_id: 31337,
};

/// Ethereum Mainnet configuration.
pub const ETH_MAINNET: NetworkConfig = NetworkConfig {
    name: "Ethereum Mainnet",
    chain_id: 1,
};

/// Ethereum Sepolia Testnet configuration.
pub const ETH_SEPOLIA: NetworkConfig = NetworkConfig {
    name: "Ethereum Sepolia",
    chain_id: 11155111,
};

/// Avalanche C-Chain Mainnet configuration.
pub const AVAX_MAINNET: NetworkConfig = NetworkConfig {
    name: "Avalanche C-Chain",
    chain_id: 43114,
};

/// Avalanche Fuji Testnet configuration.
pub const AVAX_FUJI: NetworkConfig = NetworkConfig {
    name: "Avalanche Fuji Testnet",
    chain_id: 43113,
};

const KNOWN_NETWORKS: [NetworkConfig; 5] =
    [LOCAL_DEV, ETH_MAINNET, ETH_SEPOLIA, AVAX_MAINNET, AVAX_FUJI];

/// Look up a display name for a chain id.
pub fn network_name(chain_id: u64) -> Option<&'static str> {
    KNOWN_NETWORKS
        .iter()
        .find(|network| network.chain_id == chain_id)
        .map(|network| network.name)
}

/// Recoverable signature as submitted by relayers: the classic `(v, r, s)`
/// triple produced by `eth_signTypedData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSignature {
    /// Recovery id, `27` or `28` (`0`/`1` are accepted as well).
    pub v: u8,
    /// First scalar.
    pub r: B256,
    /// Second scalar.
    pub s: B256,
}

impl SplitSignature {
    pub fn new(v: u8, r: B256, s: B256) -> Self {
        Self { v, r, s }
    }
}

/// Returns `true` for the all-zero address.
pub fn is_zero_address(address: &Address) -> bool {
    *address == Address::ZERO
}
