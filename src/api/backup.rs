// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::warn;

use crate::{
    auth::Caller,
    error::ApiError,
    models::{parse_address, RegisterBackupRequest, RegisterBackupResponse},
    state::AppState,
};

/// Register or replace the caller's backup address.
///
/// The caller is the account named by the bearer token's `sub` claim.
#[utoipa::path(
    put,
    path = "/v1/backup-address",
    request_body = RegisterBackupRequest,
    tag = "Backup",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, body = RegisterBackupResponse),
        (status = 400, description = "Malformed or zero backup address"),
        (status = 401, description = "Missing or invalid bearer token")
    )
)]
pub async fn register_backup_address(
    Caller(owner): Caller,
    State(state): State<AppState>,
    payload: Result<Json<RegisterBackupRequest>, JsonRejection>,
) -> Result<Json<RegisterBackupResponse>, ApiError> {
    let Json(request) = payload?;
    let backup_address = parse_address("backup_address", &request.backup_address)?;

    let mut token = state.token.write().await;
    let previous = token.backup_address_of(owner);
    token
        .register_backup_address(owner, backup_address)
        .map_err(|e| {
            warn!(owner = %owner, error = %e, "Backup address registration rejected");
            ApiError::from(e)
        })?;

    Ok(Json(RegisterBackupResponse::new(
        owner,
        backup_address,
        previous,
    )))
}
