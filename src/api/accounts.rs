// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::ApiError,
    models::{parse_address, AccountResponse},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/v1/accounts/{address}",
    params(
        ("address" = String, Path, description = "Account address, 0x-prefixed hex")
    ),
    tag = "Token",
    responses(
        (status = 200, body = AccountResponse),
        (status = 400, description = "Malformed address")
    )
)]
pub async fn get_account(
    Path(address): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AccountResponse>, ApiError> {
    let address = parse_address("address", &address)?;
    let token = state.token.read().await;

    Ok(Json(AccountResponse::new(
        address,
        token.balance_of(address),
        token.backup_address_of(address),
        token.is_blacklisted(address),
    )))
}
