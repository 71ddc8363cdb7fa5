// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for the authenticated caller address.
//!
//! Use the `Caller` extractor in handlers that act on behalf of an account:
//!
//! ```rust,ignore
//! async fn my_handler(Caller(address): Caller) -> impl IntoResponse {
//!     // address is the account the bearer token was issued for
//! }
//! ```

use std::str::FromStr;

use alloy::primitives::Address;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::Utc;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use super::AuthError;
use crate::state::{AppState, AuthConfig};

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Bearer token claims. `sub` carries the caller's account address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallerClaims {
    /// Subject (0x-prefixed account address)
    pub sub: String,
    /// Expiration timestamp
    #[serde(default)]
    pub exp: i64,
}

/// Extractor for the authenticated caller.
///
/// ## Authentication Modes
///
/// - **Production mode** (`AUTH_JWT_SECRET` set): HS256 signature and expiry are verified
/// - **Development mode** (no secret): structure and expiry only, no signature check
pub struct Caller(pub Address);

impl FromRequestParts<AppState> for Caller {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidAuthHeader)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidAuthHeader)?;

        let address = verify_token(token, &state.auth_config)?;
        Ok(Caller(address))
    }
}

/// Verify a bearer token and return the account address it was issued for.
pub fn verify_token(token: &str, auth_config: &AuthConfig) -> Result<Address, AuthError> {
    let claims = match auth_config.jwt_secret.as_deref() {
        Some(secret) => verify_production(token, secret)?,
        None => verify_development(token)?,
    };

    Address::from_str(claims.sub.trim()).map_err(|_| AuthError::InvalidSubject(claims.sub))
}

fn verify_production(token: &str, secret: &str) -> Result<CallerClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = CLOCK_SKEW_LEEWAY;
    validation.validate_aud = false;

    let token_data = decode::<CallerClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        jsonwebtoken::errors::ErrorKind::ImmatureSignature => AuthError::TokenNotYetValid,
        _ => AuthError::MalformedToken,
    })?;

    Ok(token_data.claims)
}

/// Development verification (no signature check).
///
/// WARNING: This should only be used in development environments.
fn verify_development(token: &str) -> Result<CallerClaims, AuthError> {
    let token_data = jsonwebtoken::dangerous::insecure_decode::<CallerClaims>(token)
        .map_err(|_e| AuthError::MalformedToken)?;

    let claims = token_data.claims;
    let now = Utc::now().timestamp();
    if claims.exp > 0 && claims.exp < now - CLOCK_SKEW_LEEWAY as i64 {
        return Err(AuthError::TokenExpired);
    }

    Ok(claims)
}

/// Issue an HS256 bearer token for `address`, valid for `ttl_secs`.
pub fn issue_token(address: Address, secret: &str, ttl_secs: i64) -> Result<String, AuthError> {
    let claims = CallerClaims {
        sub: address.to_checksum(None),
        exp: Utc::now().timestamp() + ttl_secs,
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::new(Algorithm::HS256),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::MalformedToken)
}
