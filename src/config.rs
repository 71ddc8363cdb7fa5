// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! once at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `CHAIN_ID` | EIP-712 domain chain id | `31337` |
//! | `DEPLOYER_ADDRESS` | Receives the initial supply | Required |
//! | `TOKEN_ADDRESS` | EIP-712 verifying contract | First `CREATE` address of the deployer |
//! | `INITIAL_SUPPLY` | Initial supply (decimal or `0x` hex) | `10000000000000` |
//! | `AUTH_JWT_SECRET` | HS256 secret for bearer tokens | Unset = development mode |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::SocketAddr;
use std::str::FromStr;

use alloy::primitives::{Address, U256};

use crate::blockchain::TokenDomain;

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const CHAIN_ID_ENV: &str = "CHAIN_ID";
pub const DEPLOYER_ADDRESS_ENV: &str = "DEPLOYER_ADDRESS";
pub const TOKEN_ADDRESS_ENV: &str = "TOKEN_ADDRESS";
pub const INITIAL_SUPPLY_ENV: &str = "INITIAL_SUPPLY";

/// Environment variable holding the bearer-token secret.
///
/// When unset the service runs in development mode and accepts unsigned
/// tokens. Never leave it unset outside local development.
pub const AUTH_JWT_SECRET_ENV: &str = "AUTH_JWT_SECRET";

pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default tracing filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CHAIN_ID: u64 = 31337;
const DEFAULT_INITIAL_SUPPLY: u64 = 10_000_000_000_000;

/// Configuration errors surfaced at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub chain_id: u64,
    pub deployer: Address,
    pub token_address: Address,
    pub initial_supply: U256,
    pub jwt_secret: Option<String>,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let host = get(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match get(PORT_ENV) {
            Some(raw) => parse_value(PORT_ENV, &raw)?,
            None => DEFAULT_PORT,
        };

        let chain_id = match get(CHAIN_ID_ENV) {
            Some(raw) => parse_value(CHAIN_ID_ENV, &raw)?,
            None => DEFAULT_CHAIN_ID,
        };

        let deployer: Address = get(DEPLOYER_ADDRESS_ENV)
            .ok_or(ConfigError::Missing(DEPLOYER_ADDRESS_ENV))
            .and_then(|raw| parse_value(DEPLOYER_ADDRESS_ENV, &raw))?;

        let token_address = match get(TOKEN_ADDRESS_ENV) {
            Some(raw) => parse_value(TOKEN_ADDRESS_ENV, &raw)?,
            None => deployer.create(0),
        };

        let initial_supply = match get(INITIAL_SUPPLY_ENV) {
            Some(raw) => parse_value(INITIAL_SUPPLY_ENV, &raw)?,
            None => U256::from(DEFAULT_INITIAL_SUPPLY),
        };

        let log_format = match get(LOG_FORMAT_ENV).map(|v| v.trim().to_ascii_lowercase()) {
            None => LogFormat::Pretty,
            Some(v) if v == "pretty" => LogFormat::Pretty,
            Some(v) if v == "json" => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: LOG_FORMAT_ENV,
                    reason: format!("expected `json` or `pretty`, got `{other}`"),
                })
            }
        };

        Ok(Self {
            host,
            port,
            chain_id,
            deployer,
            token_address,
            initial_supply,
            jwt_secret: get(AUTH_JWT_SECRET_ENV),
            log_format,
        })
    }

    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: HOST_ENV,
                reason: e.to_string(),
            })
    }

    pub fn domain(&self) -> TokenDomain {
        TokenDomain::new(self.chain_id, self.token_address)
    }
}

fn parse_value<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}
