//! # Message Digests
//!
//! The two digests a signer may have produced, one per account kind:
//!
//! - EOA wallets sign the "personal sign" digest
//!   `keccak256("\x19Ethereum Signed Message:\n" || len(message) || message)`.
//! - Contract wallets check an EIP-191 version `0x00` digest
//!   `keccak256(0x19 || 0x00 || verifying_contract || message_hash)`,
//!   which binds the challenge to one wallet.
//!
//! A digest that differs by a single byte makes every signature fail, so these
//! layouts must stay exactly as written.

use super::entities::{Address, Hash};
use sha3::{Digest, Keccak256};

/// Prefix prepended to EOA "personal sign" messages.
pub const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// EIP-191 leading byte.
pub const EIP191_PREFIX: u8 = 0x19;

/// EIP-191 version byte for "data with intended validator".
pub const EIP191_VERSION_VALIDATOR: u8 = 0x00;

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

/// Digest an EOA wallet signs for `personal_sign`.
pub fn personal_message_hash(message: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(PERSONAL_MESSAGE_PREFIX);
    hasher.update(message.len().to_string().as_bytes());
    hasher.update(message);
    hasher.finalize().into()
}

/// Digest a contract wallet validates, bound to `verifying_contract`.
///
/// `message_hash` is already hashed so the raw challenge is never sent to the
/// node that executes the contract call.
pub fn erc191_hash(message_hash: &Hash, verifying_contract: &Address) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update([EIP191_PREFIX, EIP191_VERSION_VALIDATOR]);
    hasher.update(verifying_contract.as_bytes());
    hasher.update(message_hash);
    hasher.finalize().into()
}
