// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};

use crate::{
    blockchain::{network_name, DOMAIN_NAME, DOMAIN_VERSION},
    models::DomainResponse,
    state::AppState,
};

/// EIP-712 domain parameters wallets need to build the typed data.
#[utoipa::path(
    get,
    path = "/v1/domain",
    tag = "Token",
    responses((status = 200, body = DomainResponse))
)]
pub async fn get_domain(State(state): State<AppState>) -> Json<DomainResponse> {
    let token = state.token.read().await;
    let domain = token.domain();

    Json(DomainResponse {
        name: DOMAIN_NAME.to_string(),
        version: DOMAIN_VERSION.to_string(),
        chain_id: domain.chain_id(),
        verifying_contract: domain.verifying_contract().to_checksum(None),
        separator: token.domain_separator().to_string(),
        network: network_name(domain.chain_id()).map(str::to_string),
        total_supply: token.total_supply().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{domain, token, INITIAL_SUPPLY};

    #[tokio::test]
    async fn domain_matches_token_configuration() {
        let state = AppState::new(token());
        let Json(body) = get_domain(State(state)).await;

        assert_eq!(body.name, "Backup Token");
        assert_eq!(body.version, "1");
        assert_eq!(body.chain_id, 31337);
        assert_eq!(
            body.verifying_contract,
            "0x5FbDB2315678afecb367f032d93F642f64180aa3"
        );
        assert_eq!(body.separator, domain().separator().to_string());
        assert_eq!(body.network.as_deref(), Some("Local Development"));
        assert_eq!(body.total_supply, INITIAL_SUPPLY.to_string());
    }
}
