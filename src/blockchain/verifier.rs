// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signer recovery for emergency-transfer authorizations.
//!
//! The verifier only answers "who signed this?". Whether that signer is the
//! account being drained is decided by the caller.

use alloy::primitives::{b256, Address, Signature, B256, U256};

use super::typed_data::{typed_data_digest, AuthorizationMessage};
use super::types::SplitSignature;

/// Order `n` of the secp256k1 group.
const SECP256K1_ORDER: B256 =
    b256!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

/// `n / 2`, the upper bound for canonical (low-s) signatures.
const SECP256K1_HALF_ORDER: B256 =
    b256!("7fffffffffffffffffffffffffffffff5d576e7357a4501ddfe92f46681b20a0");

/// Reasons a signature cannot be turned into a signer address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("Invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    #[error("Signature r value out of range")]
    InvalidR,

    #[error("Signature s value out of range")]
    InvalidS,

    #[error("Public key recovery failed: {0}")]
    RecoveryFailed(String),
}

/// Map `v` to the y-parity bit. Accepts `27`/`28` and the raw `0`/`1`.
pub fn parity_from_v(v: u8) -> Result<bool, SignatureError> {
    match v {
        0 | 27 => Ok(false),
        1 | 28 => Ok(true),
        other => Err(SignatureError::InvalidRecoveryId(other)),
    }
}

/// Reject scalars that would let an attacker steer recovery: `r` must lie in
/// `[1, n-1]` and `s` in `[1, n/2]`.
fn check_scalars(signature: &SplitSignature) -> Result<(), SignatureError> {
    if signature.r.is_zero() || signature.r >= SECP256K1_ORDER {
        return Err(SignatureError::InvalidR);
    }
    if signature.s.is_zero() || signature.s > SECP256K1_HALF_ORDER {
        return Err(SignatureError::InvalidS);
    }
    Ok(())
}

/// Recover the address that signed `message` under `domain_separator`.
pub fn recover_signer(
    domain_separator: B256,
    message: &AuthorizationMessage,
    signature: &SplitSignature,
) -> Result<Address, SignatureError> {
    let y_parity = parity_from_v(signature.v)?;
    check_scalars(signature)?;

    let digest = typed_data_digest(domain_separator, message.struct_hash());
    let signature = Signature::new(
        U256::from_be_bytes(signature.r.0),
        U256::from_be_bytes(signature.s.0),
        y_parity,
    );

    signature
        .recover_address_from_prehash(&digest)
        .map_err(|e| SignatureError::RecoveryFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::TokenDomain;
    use crate::test_support::{domain, sign, signer, BACKUP, OTHER_KEY, OWNER_KEY, TOKEN};

    #[test]
    fn recovers_the_signing_owner() {
        let owner = signer(OWNER_KEY).address();
        let domain = domain();
        let message = AuthorizationMessage::full(owner, BACKUP);
        let sig = sign(OWNER_KEY, &domain, &message);

        assert_eq!(recover_signer(domain.separator(), &message, &sig), Ok(owner));
    }

    #[test]
    fn another_key_recovers_another_address() {
        let owner = signer(OWNER_KEY).address();
        let domain = domain();
        let message = AuthorizationMessage::partial(owner, BACKUP, U256::from(5u64));
        let sig = sign(OTHER_KEY, &domain, &message);

        let recovered = recover_signer(domain.separator(), &message, &sig).unwrap();
        assert_ne!(recovered, owner);
        assert_eq!(recovered, signer(OTHER_KEY).address());
    }

    #[test]
    fn wrong_chain_does_not_recover_the_owner() {
        let owner = signer(OWNER_KEY).address();
        let message = AuthorizationMessage::full(owner, BACKUP);
        let sig = sign(OWNER_KEY, &TokenDomain::new(123, TOKEN), &message);

        let recovered = recover_signer(domain().separator(), &message, &sig);
        assert_ne!(recovered, Ok(owner));
    }

    #[test]
    fn raw_parity_v_is_accepted() {
        let owner = signer(OWNER_KEY).address();
        let domain = domain();
        let message = AuthorizationMessage::full(owner, BACKUP);
        let mut sig = sign(OWNER_KEY, &domain, &message);
        sig.v -= 27;

        assert_eq!(recover_signer(domain.separator(), &message, &sig), Ok(owner));
    }

    #[test]
    fn out_of_range_recovery_id_is_rejected() {
        let owner = signer(OWNER_KEY).address();
        let domain = domain();
        let message = AuthorizationMessage::full(owner, BACKUP);
        let mut sig = sign(OWNER_KEY, &domain, &message);
        sig.v = 29;

        assert_eq!(
            recover_signer(domain.separator(), &message, &sig),
            Err(SignatureError::InvalidRecoveryId(29))
        );
    }

    #[test]
    fn zero_and_oversized_scalars_are_rejected() {
        let owner = signer(OWNER_KEY).address();
        let domain = domain();
        let message = AuthorizationMessage::full(owner, BACKUP);
        let sig = sign(OWNER_KEY, &domain, &message);

        let zero_r = SplitSignature::new(sig.v, B256::ZERO, sig.s);
        assert_eq!(
            recover_signer(domain.separator(), &message, &zero_r),
            Err(SignatureError::InvalidR)
        );

        let big_r = SplitSignature::new(sig.v, SECP256K1_ORDER, sig.s);
        assert_eq!(
            recover_signer(domain.separator(), &message, &big_r),
            Err(SignatureError::InvalidR)
        );

        let zero_s = SplitSignature::new(sig.v, sig.r, B256::ZERO);
        assert_eq!(
            recover_signer(domain.separator(), &message, &zero_s),
            Err(SignatureError::InvalidS)
        );
    }

    #[test]
    fn malleated_high_s_is_rejected() {
        let owner = signer(OWNER_KEY).address();
        let domain = domain();
        let message = AuthorizationMessage::full(owner, BACKUP);
        let sig = sign(OWNER_KEY, &domain, &message);

        // (r, n - s, !v) is the same point pair and would otherwise also recover the owner.
        let order = U256::from_be_bytes(SECP256K1_ORDER.0);
        let high_s = order - U256::from_be_bytes(sig.s.0);
        let flipped_v = if sig.v == 27 { 28 } else { 27 };
        let malleated = SplitSignature::new(flipped_v, sig.r, high_s.to_be_bytes::<32>().into());

        assert_eq!(
            recover_signer(domain.separator(), &message, &malleated),
            Err(SignatureError::InvalidS)
        );
    }
}
