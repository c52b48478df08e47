//! # Authorization Errors
//!
//! Error types for signer authorization.
//!
//! Only malformed input and collaborator failures are errors. A signature that
//! does not prove authorization is `Ok(false)`, never an `Err`.

use crate::ports::outbound::{ChainError, ValidatorError};
use thiserror::Error;

/// Errors returned by `Authenticator::is_authorized_signer`.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The signature blob is not hex or not a positive multiple of 65 bytes
    #[error("Malformed signature: {0}")]
    MalformedSignature(#[from] CodecError),

    /// The claimed address is not a 20-byte hex address
    #[error("Invalid address {input:?}: {reason}")]
    InvalidAddress {
        input: String,
        #[source]
        reason: AddressError,
    },

    /// The chain could not tell whether the address holds code
    #[error("Account classification failed: {0}")]
    ChainLookupFailed(#[source] ChainError),

    /// The contract wallet's `isValidSignature` call itself failed
    #[error("Contract call failed: {0}")]
    ContractCallFailed(#[source] ValidatorError),
}

impl AuthError {
    /// True when a collaborator failed, so the verdict is unknown rather than
    /// the input being bad.
    #[must_use]
    pub fn is_operational(&self) -> bool {
        matches!(
            self,
            Self::ChainLookupFailed(_) | Self::ContractCallFailed(_)
        )
    }
}

/// Errors decoding a hex signature blob.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Not valid hex (bad character or odd number of digits)
    #[error("signature is not valid hex")]
    InvalidHex,

    /// Decoded to zero bytes
    #[error("signature is empty")]
    Empty,

    /// Decoded length is not a multiple of 65
    #[error("signature length {len} is not a multiple of 65 bytes")]
    InvalidLength { len: usize },

    /// More concatenated signatures than the configured limit
    #[error("{count} signatures exceed the limit of {max}")]
    TooManyCandidates { count: usize, max: usize },

    /// A `0x` prefix was supplied but prefixes are disabled
    #[error("hex prefix not accepted")]
    PrefixNotAccepted,
}

/// Errors parsing an address string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Not exactly 40 hex digits after the optional prefix
    #[error("expected 40 hex digits, got {0}")]
    InvalidLength(usize),

    /// Contains non-hex characters
    #[error("address is not valid hex")]
    InvalidHex,
}

/// Errors recovering a signer from an ECDSA signature.
///
/// These are folded into a negative verdict by the authenticator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// r or s is not a valid nonzero scalar
    #[error("Invalid signature format")]
    InvalidFormat,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// Failed to recover public key
    #[error("Failed to recover public key")]
    RecoveryFailed,
}
