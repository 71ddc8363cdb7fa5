// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Bearer-token authentication for owner actions (backup registration).
//!
//! ## Auth Flow
//!
//! 1. The owner obtains a JWT whose `sub` claim is their account address
//! 2. The client sends `Authorization: Bearer <JWT>`
//! 3. The server verifies the HS256 signature and expiry, then treats `sub`
//!    as the caller address
//!
//! ## Minting Tokens
//!
//! The relayer does not run a login flow. Whoever holds `AUTH_JWT_SECRET`
//! mints owner tokens with [`issue_token`] (or any HS256 JWT library), with
//! `sub` set to the owner's address and a short `exp`:
//!
//! ```rust,ignore
//! let jwt = backup_token::auth::issue_token(owner, &secret, 600)?;
//! // Authorization: Bearer {jwt}
//! ```
//!
//! Relaying an emergency transfer needs no authentication: the EIP-712
//! signature is the authorization.
//!
//! ## Security
//!
//! - Clock skew tolerance is 60 seconds
//! - Without `AUTH_JWT_SECRET` signatures are not checked (development only)

pub mod error;
pub mod extractor;

pub use error::AuthError;
pub use extractor::{issue_token, verify_token, Caller, CallerClaims};
