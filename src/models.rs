// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response bodies for the REST API. All types derive
//! `Serialize`/`Deserialize` and `ToSchema` for JSON handling and OpenAPI
//! documentation.
//!
//! ## Wire Formats
//!
//! - Addresses: `0x`-prefixed hex, checksummed on output
//! - Amounts: decimal strings (`0x` hex accepted on input)
//! - Signature `r`/`s`: `0x`-prefixed 32-byte hex, `v` as a number

use std::str::FromStr;

use alloy::primitives::{Address, B256, U256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::blockchain::{SchemaVersion, SplitSignature};
use crate::error::ApiError;
use crate::token::{TokenEvent, TokenEventKind, TransferReceipt};

// =============================================================================
// Parsing helpers
// =============================================================================

pub fn parse_address(field: &str, raw: &str) -> Result<Address, ApiError> {
    Address::from_str(raw.trim())
        .map_err(|e| ApiError::bad_request(format!("Invalid {field}: {e}")))
}

pub fn parse_amount(field: &str, raw: &str) -> Result<U256, ApiError> {
    U256::from_str(raw.trim())
        .map_err(|e| ApiError::bad_request(format!("Invalid {field}: {e}")))
}

pub fn parse_word(field: &str, raw: &str) -> Result<B256, ApiError> {
    B256::from_str(raw.trim())
        .map_err(|e| ApiError::bad_request(format!("Invalid {field}: {e}")))
}

/// Narrow a wire recovery id. Values past `u8::MAX` are never valid and
/// saturate, so the signature check rejects them after the registry and
/// usage checks have run.
pub fn recovery_id(v: u64) -> u8 {
    u8::try_from(v).unwrap_or(u8::MAX)
}

fn format_address(address: Address) -> String {
    address.to_checksum(None)
}

// =============================================================================
// Backup registration
// =============================================================================

/// Register (or replace) the caller's backup address.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterBackupRequest {
    /// Address that receives funds on an emergency transfer.
    pub backup_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct RegisterBackupResponse {
    pub owner: String,
    pub backup_address: String,
    /// Backup address replaced by this registration, if any.
    pub previous: Option<String>,
}

impl RegisterBackupResponse {
    pub fn new(owner: Address, backup_address: Address, previous: Option<Address>) -> Self {
        Self {
            owner: format_address(owner),
            backup_address: format_address(backup_address),
            previous: previous.map(format_address),
        }
    }
}

// =============================================================================
// Emergency transfers
// =============================================================================

/// Schema V1 relay: move the whole balance.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmergencyTransferRequest {
    pub account: String,
    pub backup_address: String,
    /// Recovery id, `27`/`28` (or `0`/`1`).
    pub v: u64,
    pub r: String,
    pub s: String,
}

impl EmergencyTransferRequest {
    pub fn parse(&self) -> Result<(Address, Address, SplitSignature), ApiError> {
        Ok((
            parse_address("account", &self.account)?,
            parse_address("backup_address", &self.backup_address)?,
            SplitSignature::new(
                recovery_id(self.v),
                parse_word("r", &self.r)?,
                parse_word("s", &self.s)?,
            ),
        ))
    }
}

/// Schema V2 relay: move an explicit amount.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartialEmergencyTransferRequest {
    pub account: String,
    pub backup_address: String,
    /// Token amount, decimal string.
    pub amount: String,
    /// Recovery id, `27`/`28` (or `0`/`1`).
    pub v: u64,
    pub r: String,
    pub s: String,
}

impl PartialEmergencyTransferRequest {
    pub fn parse(&self) -> Result<(Address, Address, U256, SplitSignature), ApiError> {
        Ok((
            parse_address("account", &self.account)?,
            parse_address("backup_address", &self.backup_address)?,
            parse_amount("amount", &self.amount)?,
            SplitSignature::new(
                recovery_id(self.v),
                parse_word("r", &self.r)?,
                parse_word("s", &self.s)?,
            ),
        ))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TransferReceiptResponse {
    pub account: String,
    pub backup_address: String,
    /// Amount moved, decimal string.
    pub amount: String,
    pub schema: SchemaVersion,
}

impl From<TransferReceipt> for TransferReceiptResponse {
    fn from(receipt: TransferReceipt) -> Self {
        Self {
            account: format_address(receipt.account),
            backup_address: format_address(receipt.backup_address),
            amount: receipt.amount.to_string(),
            schema: receipt.schema,
        }
    }
}

// =============================================================================
// Queries
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct AccountResponse {
    pub address: String,
    /// Balance, decimal string.
    pub balance: String,
    pub backup_address: Option<String>,
    /// Whether this address already received an emergency transfer.
    pub blacklisted: bool,
}

impl AccountResponse {
    pub fn new(
        address: Address,
        balance: U256,
        backup_address: Option<Address>,
        blacklisted: bool,
    ) -> Self {
        Self {
            address: format_address(address),
            balance: balance.to_string(),
            backup_address: backup_address.map(format_address),
            blacklisted,
        }
    }
}

/// EIP-712 domain the relayer verifies signatures against.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct DomainResponse {
    pub name: String,
    pub version: String,
    pub chain_id: u64,
    pub verifying_contract: String,
    /// Domain separator, `0x` hex.
    pub separator: String,
    /// Well-known network name for `chain_id`, if any.
    pub network: Option<String>,
    /// Total supply, decimal string.
    pub total_supply: String,
}

// =============================================================================
// Events
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventPayload {
    BackupAddressRegistered {
        owner: String,
        backup_address: String,
        previous: Option<String>,
    },
    EmergencyTransfer {
        account: String,
        backup_address: String,
        amount: String,
        schema: SchemaVersion,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub event_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: EventPayload,
}

/// One page of the event journal.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventListResponse {
    pub events: Vec<EventResponse>,
    /// Journal length (before limit/offset).
    pub total: usize,
    /// Whether more events follow this page.
    pub has_more: bool,
}

impl From<&TokenEvent> for EventResponse {
    fn from(event: &TokenEvent) -> Self {
        let payload = match &event.kind {
            TokenEventKind::BackupAddressRegistered {
                owner,
                backup_address,
                previous,
            } => EventPayload::BackupAddressRegistered {
                owner: format_address(*owner),
                backup_address: format_address(*backup_address),
                previous: previous.map(format_address),
            },
            TokenEventKind::EmergencyTransfer {
                account,
                backup_address,
                amount,
                schema,
            } => EventPayload::EmergencyTransfer {
                account: format_address(*account),
                backup_address: format_address(*backup_address),
                amount: amount.to_string(),
                schema: *schema,
            },
        };

        Self {
            event_id: event.event_id.to_string(),
            timestamp: event.timestamp,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use axum::http::StatusCode;

    #[test]
    fn parse_helpers_reject_garbage_with_field_name() {
        let err = parse_address("account", "0x1234").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.starts_with("Invalid account"));

        let err = parse_amount("amount", "ten").unwrap_err();
        assert!(err.message.starts_with("Invalid amount"));

        let err = parse_word("r", "0xabc").unwrap_err();
        assert!(err.message.starts_with("Invalid r"));
    }

    #[test]
    fn oversized_recovery_id_saturates() {
        assert_eq!(recovery_id(27), 27);
        assert_eq!(recovery_id(255), 255);
        assert_eq!(recovery_id(300), u8::MAX);
        assert_eq!(recovery_id(u64::MAX), u8::MAX);
    }

    #[test]
    fn amounts_accept_decimal_and_hex() {
        assert_eq!(parse_amount("amount", "100").unwrap(), U256::from(100u64));
        assert_eq!(parse_amount("amount", "0x64").unwrap(), U256::from(100u64));
    }

    #[test]
    fn partial_request_parses_all_fields() {
        let request = PartialEmergencyTransferRequest {
            account: "0x70997970C51812dc3A010C7d01b50e0d17dc79C8".into(),
            backup_address: "0x15d34aaf54267db7d7c367839aaf71a00a2c6a65".into(),
            amount: "100".into(),
            v: 28,
            r: format!("0x{}", "11".repeat(32)),
            s: format!("0x{}", "22".repeat(32)),
        };

        let (account, backup, amount, signature) = request.parse().unwrap();
        assert_eq!(account, address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"));
        assert_eq!(backup, address!("15d34AAf54267DB7D7c367839AAf71A00a2C6A65"));
        assert_eq!(amount, U256::from(100u64));
        assert_eq!(signature.v, 28);
        assert_eq!(signature.r, B256::repeat_byte(0x11));
        assert_eq!(signature.s, B256::repeat_byte(0x22));
    }

    #[test]
    fn event_payload_is_tagged() {
        let event = TokenEvent::new(TokenEventKind::EmergencyTransfer {
            account: Address::repeat_byte(0x01),
            backup_address: Address::repeat_byte(0x02),
            amount: U256::from(1000u64),
            schema: SchemaVersion::V1,
        });

        let json = serde_json::to_value(EventResponse::from(&event)).unwrap();
        assert_eq!(json["type"], "emergency_transfer");
        assert_eq!(json["amount"], "1000");
        assert_eq!(json["schema"], "v1");
        assert_eq!(json["event_id"], event.event_id.to_string());
    }
}
