//! # ECDSA Recovery (secp256k1)
//!
//! Thin wrapper over k256 public-key recovery.
//!
//! ## Security Notes
//!
//! - Recovery ID must be 0, 1, 27 or 28; anything else is rejected
//! - High-S signatures are accepted, as by `ecrecover`: s is folded into the
//!   lower half of the order and the recovery id parity flipped
//! - Intermediate signature buffers are zeroized

use super::entities::{Address, EcdsaSignature, Hash};
use super::errors::SignatureError;
use super::hashing::keccak256;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use zeroize::Zeroize;

/// Recover the signer's address from a prehashed digest and a signature.
pub fn recover_address(digest: &Hash, signature: &EcdsaSignature) -> Result<Address, SignatureError> {
    let mut recovery_id = parse_recovery_id(signature.v)?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);

    let parsed = Signature::from_slice(&sig_bytes);
    sig_bytes.zeroize();
    let mut sig = parsed.map_err(|_| SignatureError::InvalidFormat)?;

    if let Some(low_s) = sig.normalize_s() {
        sig = low_s;
        recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced());
    }

    let recovered_key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)?;

    Ok(address_from_pubkey(&recovered_key))
}

/// Derive Ethereum address from public key.
///
/// Last 20 bytes of keccak256 over the uncompressed point without its 0x04 tag.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let pubkey_bytes = public_key.to_encoded_point(false);
    let hash = keccak256(&pubkey_bytes.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Address::new(address)
}

/// Parse recovery ID from v value.
///
/// Valid v values: 0, 1, 27, 28
fn parse_recovery_id(v: u8) -> Result<RecoveryId, SignatureError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(SignatureError::InvalidRecoveryId(v)),
    };

    RecoveryId::try_from(id).map_err(|_| SignatureError::InvalidRecoveryId(v))
}

// =============================================================================
// TEST HELPERS
// =============================================================================
