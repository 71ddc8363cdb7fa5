// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::process::ExitCode;

use backup_token::{
    api::router,
    blockchain::network_name,
    config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER},
    state::{AppState, AuthConfig},
    token::BackupToken,
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Tracing is not up yet.
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.log_format);

    let addr = match config.bind_address() {
        Ok(addr) => addr,
        Err(e) => {
            error!(error = %e, "Invalid bind address");
            return ExitCode::FAILURE;
        }
    };

    let domain = config.domain();
    let token = BackupToken::new(domain, config.deployer, config.initial_supply);
    info!(
        chain_id = domain.chain_id(),
        network = network_name(domain.chain_id()).unwrap_or("unknown"),
        verifying_contract = %domain.verifying_contract(),
        separator = %token.domain_separator(),
        deployer = %config.deployer,
        initial_supply = %config.initial_supply,
        "Backup token initialized"
    );

    if config.jwt_secret.is_none() {
        warn!(
            "AUTH_JWT_SECRET not set, bearer tokens are NOT signature-checked (development mode)"
        );
    }

    let state = AppState::new(token).with_auth_config(AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
    });
    let app = router(state);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, %addr, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received");
                signal_token.cancel();
            }
            Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
        }
    });

    info!(%addr, "Backup token relayer listening (docs at /docs)");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
    {
        error!(error = %e, "Server failed");
        return ExitCode::FAILURE;
    }

    info!("Server stopped");
    ExitCode::SUCCESS
}
