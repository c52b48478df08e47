//! # Shared Fixtures
//!
//! Key material and signing helpers for the end-to-end suite and benchmarks.
//! Signatures are produced exactly as a wallet would: 65 bytes, `r || s || v`
//! with v in the 27/28 convention.

use dappauth::{
    address_from_pubkey, erc191_hash, keccak256, personal_message_hash, Address, Hash,
    SIGNATURE_LENGTH,
};
use k256::ecdsa::SigningKey;

/// A secp256k1 key pair and its Ethereum address.
pub struct TestKey {
    pub signing_key: SigningKey,
    pub address: Address,
}

impl TestKey {
    /// Fresh random key.
    pub fn random() -> Self {
        Self::from_signing_key(SigningKey::random(&mut rand::thread_rng()))
    }

    /// Key from a fixed 32-byte secret, for deterministic vectors.
    pub fn from_secret(secret: [u8; 32]) -> Self {
        let signing_key =
            SigningKey::from_bytes(&secret.into()).expect("secret must be a valid scalar");
        Self::from_signing_key(signing_key)
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let address = address_from_pubkey(signing_key.verifying_key());
        Self {
            signing_key,
            address,
        }
    }

    /// Sign a prehashed digest.
    pub fn sign_digest(&self, digest: &Hash) -> [u8; SIGNATURE_LENGTH] {
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .expect("signing failed");

        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..64].copy_from_slice(&signature.to_bytes());
        bytes[64] = recovery_id.to_byte() + 27;
        bytes
    }

    /// `personal_sign` over the challenge, as an EOA wallet does.
    pub fn sign_personal(&self, challenge: &str) -> [u8; SIGNATURE_LENGTH] {
        self.sign_digest(&personal_message_hash(challenge.as_bytes()))
    }

    /// Owner signature a contract wallet at `wallet` will check.
    pub fn sign_for_wallet(&self, challenge: &str, wallet: Address) -> [u8; SIGNATURE_LENGTH] {
        self.sign_digest(&erc191_hash(&keccak256(challenge.as_bytes()), &wallet))
    }
}

/// Concatenate signatures into the hex blob the authenticator receives.
pub fn signature_hex<'a>(
    signatures: impl IntoIterator<Item = &'a [u8; SIGNATURE_LENGTH]>,
) -> String {
    let mut hex_blob = String::from("0x");
    for signature in signatures {
        hex_blob.push_str(&hex::encode(signature));
    }
    hex_blob
}

/// Lowercase `0x` hex of an address.
pub fn address_hex(address: &Address) -> String {
    format!("0x{}", hex::encode(address.as_bytes()))
}
