// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    blockchain::SchemaVersion,
    models::{
        AccountResponse, DomainResponse, EmergencyTransferRequest, EventListResponse, EventPayload,
        EventResponse, PartialEmergencyTransferRequest, RegisterBackupRequest,
        RegisterBackupResponse, TransferReceiptResponse,
    },
    state::AppState,
};

pub mod accounts;
pub mod backup;
pub mod domain;
pub mod events;
pub mod health;
pub mod transfer;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/domain", get(domain::get_domain))
        .route("/accounts/{address}", get(accounts::get_account))
        .route("/backup-address", put(backup::register_backup_address))
        .route("/emergency-transfer", post(transfer::emergency_transfer))
        .route(
            "/emergency-transfer/partial",
            post(transfer::partial_emergency_transfer),
        )
        .route("/events", get(events::list_events));

    Router::new()
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .nest("/v1", v1_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::liveness,
        health::readiness,
        domain::get_domain,
        accounts::get_account,
        backup::register_backup_address,
        transfer::emergency_transfer,
        transfer::partial_emergency_transfer,
        events::list_events
    ),
    components(
        schemas(
            health::HealthResponse,
            health::ReadyResponse,
            health::HealthChecks,
            DomainResponse,
            AccountResponse,
            RegisterBackupRequest,
            RegisterBackupResponse,
            EmergencyTransferRequest,
            PartialEmergencyTransferRequest,
            TransferReceiptResponse,
            EventListResponse,
            EventResponse,
            EventPayload,
            SchemaVersion
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and readiness checks"),
        (name = "Token", description = "Balances, domain and event journal"),
        (name = "Backup", description = "Backup address registration"),
        (name = "Emergency Transfer", description = "Relay signed emergency transfers")
    )
)]
struct ApiDoc;
