// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! EVM-side primitives of the backup token.
//!
//! This module provides functionality for:
//! - The EIP-712 domain binding signatures to one deployment
//! - The `EmergencyTransfer` typed-data message (schema V1 and V2)
//! - Owner-side signing and relayer-side signer recovery

pub mod domain;
pub mod signing;
pub mod typed_data;
pub mod types;
pub mod verifier;

pub use domain::{TokenDomain, DOMAIN_NAME, DOMAIN_VERSION};
pub use signing::{
    sign_authorization, signer_from_hex, signer_from_pem, signer_from_pem_file, SigningError,
};
pub use typed_data::{AuthorizationMessage, SchemaVersion};
pub use types::*;
pub use verifier::{recover_signer, SignatureError};
