// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::token::{RegistryError, TransferError};

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }
}

impl From<TransferError> for ApiError {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::RecipientBlacklisted => Self::conflict(err.to_string()),
            TransferError::InvalidBackupAddress
            | TransferError::InvalidSignature
            | TransferError::Ledger(_) => Self::unprocessable(err.to_string()),
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::LedgerError;
    use alloy::primitives::U256;
    use axum::body::to_bytes;

    #[test]
    fn constructors_set_status_and_message() {
        let bad = ApiError::bad_request("bad");
        assert_eq!(bad.status, StatusCode::BAD_REQUEST);
        assert_eq!(bad.message, "bad");

        let conflict = ApiError::conflict("taken");
        assert_eq!(conflict.status, StatusCode::CONFLICT);

        let unp = ApiError::unprocessable("oops");
        assert_eq!(unp.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(unp.message, "oops");
    }

    #[test]
    fn transfer_errors_keep_their_exact_message() {
        let cases = [
            (
                TransferError::InvalidBackupAddress,
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid backup address",
            ),
            (
                TransferError::RecipientBlacklisted,
                StatusCode::CONFLICT,
                "Recipient is blacklisted",
            ),
            (
                TransferError::InvalidSignature,
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid signature",
            ),
            (
                TransferError::Ledger(LedgerError::InsufficientBalance {
                    balance: U256::from(10u64),
                    needed: U256::from(100u64),
                }),
                StatusCode::UNPROCESSABLE_ENTITY,
                "transfer amount exceeds balance",
            ),
        ];

        for (err, status, message) in cases {
            let api = ApiError::from(err);
            assert_eq!(api.status, status);
            assert_eq!(api.message, message);
        }
    }

    #[test]
    fn registry_errors_are_bad_requests() {
        let api = ApiError::from(RegistryError::ZeroAddress);
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.message, "Backup address cannot be the zero address");
    }

    #[tokio::test]
    async fn into_response_returns_json_body() {
        let response = ApiError::bad_request("bad data").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body_bytes.to_vec()).unwrap();
        assert_eq!(body, r#"{"error":"bad data"}"#);
    }
}
