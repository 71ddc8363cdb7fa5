// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Relay endpoints for signed emergency transfers.
//!
//! No bearer token is needed: the EIP-712 signature is the authorization, so
//! any relayer may submit it on the owner's behalf.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::warn;

use crate::{
    error::ApiError,
    models::{EmergencyTransferRequest, PartialEmergencyTransferRequest, TransferReceiptResponse},
    state::AppState,
    token::TransferError,
};

fn rejected(account: &str, backup_address: &str, err: TransferError) -> ApiError {
    warn!(
        account = %account,
        backup_address = %backup_address,
        error = %err,
        "Emergency transfer rejected"
    );
    ApiError::from(err)
}

/// Schema V1: move the account's whole balance to its backup address.
#[utoipa::path(
    post,
    path = "/v1/emergency-transfer",
    request_body = EmergencyTransferRequest,
    tag = "Emergency Transfer",
    responses(
        (status = 200, body = TransferReceiptResponse),
        (status = 400, description = "Malformed request"),
        (status = 409, description = "Recipient is blacklisted"),
        (status = 422, description = "Invalid backup address, signature or balance")
    )
)]
pub async fn emergency_transfer(
    State(state): State<AppState>,
    payload: Result<Json<EmergencyTransferRequest>, JsonRejection>,
) -> Result<Json<TransferReceiptResponse>, ApiError> {
    let Json(request) = payload?;
    let (account, backup_address, signature) = request.parse()?;

    let mut token = state.token.write().await;
    let receipt = token
        .transfer_via_signature(
            account,
            backup_address,
            signature.v,
            signature.r,
            signature.s,
        )
        .map_err(|e| rejected(&request.account, &request.backup_address, e))?;

    Ok(Json(receipt.into()))
}

/// Schema V2: move an explicit amount to the account's backup address.
#[utoipa::path(
    post,
    path = "/v1/emergency-transfer/partial",
    request_body = PartialEmergencyTransferRequest,
    tag = "Emergency Transfer",
    responses(
        (status = 200, body = TransferReceiptResponse),
        (status = 400, description = "Malformed request"),
        (status = 409, description = "Recipient is blacklisted"),
        (status = 422, description = "Invalid backup address, signature or balance")
    )
)]
pub async fn partial_emergency_transfer(
    State(state): State<AppState>,
    payload: Result<Json<PartialEmergencyTransferRequest>, JsonRejection>,
) -> Result<Json<TransferReceiptResponse>, ApiError> {
    let Json(request) = payload?;
    let (account, backup_address, amount, signature) = request.parse()?;

    let mut token = state.token.write().await;
    let receipt = token
        .transfer_via_signature_amount(
            account,
            backup_address,
            amount,
            signature.v,
            signature.r,
            signature.s,
        )
        .map_err(|e| rejected(&request.account, &request.backup_address, e))?;

    Ok(Json(receipt.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::{AuthorizationMessage, SchemaVersion, SplitSignature};
    use crate::test_support::{domain, funded_token, sign, signer, BACKUP, OWNER_KEY};
    use alloy::primitives::{Address, U256};
    use axum::http::StatusCode;

    fn owner() -> Address {
        signer(OWNER_KEY).address()
    }

    fn registered_state(balance: u64) -> AppState {
        let mut token = funded_token(owner(), balance);
        token.register_backup_address(owner(), BACKUP).unwrap();
        AppState::new(token)
    }

    fn full_request(signature: SplitSignature) -> EmergencyTransferRequest {
        EmergencyTransferRequest {
            account: owner().to_string(),
            backup_address: BACKUP.to_string(),
            v: u64::from(signature.v),
            r: signature.r.to_string(),
            s: signature.s.to_string(),
        }
    }

    fn partial_request(amount: u64, signature: SplitSignature) -> PartialEmergencyTransferRequest {
        PartialEmergencyTransferRequest {
            account: owner().to_string(),
            backup_address: BACKUP.to_string(),
            amount: amount.to_string(),
            v: u64::from(signature.v),
            r: signature.r.to_string(),
            s: signature.s.to_string(),
        }
    }

    #[tokio::test]
    async fn full_transfer_moves_everything() {
        let state = registered_state(1000);
        let signature = sign(
            OWNER_KEY,
            &domain(),
            &AuthorizationMessage::full(owner(), BACKUP),
        );

        let Json(receipt) =
            emergency_transfer(State(state.clone()), Ok(Json(full_request(signature))))
                .await
                .expect("transfer succeeds");

        assert_eq!(receipt.amount, "1000");
        assert_eq!(receipt.schema, SchemaVersion::V1);

        let token = state.token.read().await;
        assert_eq!(token.balance_of(owner()), U256::ZERO);
        assert_eq!(token.balance_of(BACKUP), U256::from(1000u64));
        assert!(token.is_blacklisted(BACKUP));
    }

    #[tokio::test]
    async fn replay_is_conflict() {
        let state = registered_state(1000);
        let signature = sign(
            OWNER_KEY,
            &domain(),
            &AuthorizationMessage::full(owner(), BACKUP),
        );

        let Json(first) =
            emergency_transfer(State(state.clone()), Ok(Json(full_request(signature))))
                .await
                .unwrap();
        assert_eq!(first.amount, "1000");

        let err = emergency_transfer(State(state.clone()), Ok(Json(full_request(signature))))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.message, "Recipient is blacklisted");
    }

    #[tokio::test]
    async fn partial_transfer_moves_amount() {
        let state = registered_state(1000);
        let signature = sign(
            OWNER_KEY,
            &domain(),
            &AuthorizationMessage::partial(owner(), BACKUP, U256::from(100u64)),
        );

        let Json(receipt) = partial_emergency_transfer(
            State(state.clone()),
            Ok(Json(partial_request(100, signature))),
        )
        .await
        .expect("transfer succeeds");

        assert_eq!(receipt.amount, "100");
        assert_eq!(receipt.schema, SchemaVersion::V2);

        let token = state.token.read().await;
        assert_eq!(token.balance_of(owner()), U256::from(900u64));
        assert_eq!(token.balance_of(BACKUP), U256::from(100u64));
    }

    #[tokio::test]
    async fn tampered_amount_is_invalid_signature() {
        let state = registered_state(1000);
        let signature = sign(
            OWNER_KEY,
            &domain(),
            &AuthorizationMessage::partial(owner(), BACKUP, U256::from(100u64)),
        );

        let err = partial_emergency_transfer(
            State(state.clone()),
            Ok(Json(partial_request(500, signature))),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "Invalid signature");
        assert!(!state.token.read().await.is_blacklisted(BACKUP));
    }

    #[tokio::test]
    async fn insufficient_balance_is_unprocessable() {
        let state = registered_state(10);
        let signature = sign(
            OWNER_KEY,
            &domain(),
            &AuthorizationMessage::partial(owner(), BACKUP, U256::from(100u64)),
        );

        let err = partial_emergency_transfer(
            State(state.clone()),
            Ok(Json(partial_request(100, signature))),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "transfer amount exceeds balance");

        let token = state.token.read().await;
        assert_eq!(token.balance_of(owner()), U256::from(10u64));
        assert!(!token.is_blacklisted(BACKUP));
    }

    #[tokio::test]
    async fn malformed_signature_words_are_bad_request() {
        let state = registered_state(1000);
        let mut request =
            full_request(SplitSignature::new(27, Default::default(), Default::default()));
        request.r = "0x1234".to_string();

        let err = emergency_transfer(State(state), Ok(Json(request)))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn oversized_recovery_id_is_invalid_signature() {
        let state = registered_state(1000);
        let signature = sign(
            OWNER_KEY,
            &domain(),
            &AuthorizationMessage::full(owner(), BACKUP),
        );
        let mut request = full_request(signature);
        request.v = 300;

        let err = emergency_transfer(State(state.clone()), Ok(Json(request)))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "Invalid signature");

        let token = state.token.read().await;
        assert_eq!(token.balance_of(owner()), U256::from(1000u64));
        assert!(!token.is_blacklisted(BACKUP));
    }
}
