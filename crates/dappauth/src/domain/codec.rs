//! # Signature Blob Codec
//!
//! A signature blob is hex encoding one or more concatenated 65-byte
//! `r || s || v` signatures. Several signatures are candidates for a
//! multi-key contract wallet; an EOA only ever uses the first.

use super::entities::{strip_hex_prefix, EcdsaSignature};
use super::errors::CodecError;
use std::iter::FusedIterator;
use std::slice::ChunksExact;

/// Length of one `r || s || v` signature in bytes.
pub const SIGNATURE_LENGTH: usize = 65;

/// Offset added to a raw 0/1 recovery id (Yellow Paper convention).
const RECOVERY_ID_OFFSET: u8 = 27;

/// Decoded signature blob. Always a nonzero multiple of 65 bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureBlob {
    bytes: Vec<u8>,
}

impl SignatureBlob {
    /// Decode a hex blob. A `0x` prefix is accepted.
    pub fn from_hex(input: &str) -> Result<Self, CodecError> {
        let bytes = hex::decode(strip_hex_prefix(input)).map_err(|_| CodecError::InvalidHex)?;
        Self::from_bytes(bytes)
    }

    /// Wrap already-decoded bytes, checking the length rule.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, CodecError> {
        if bytes.is_empty() {
            return Err(CodecError::Empty);
        }
        if bytes.len() % SIGNATURE_LENGTH != 0 {
            return Err(CodecError::InvalidLength { len: bytes.len() });
        }
        Ok(Self { bytes })
    }

    /// Number of candidate signatures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len() / SIGNATURE_LENGTH
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The raw concatenated bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// First candidate, the only one an EOA can use.
    #[must_use]
    pub fn first(&self) -> Option<EcdsaSignature> {
        self.candidates().next()
    }

    /// Candidates in blob order with v normalized to 27/28.
    ///
    /// Each call starts a fresh pass over the blob.
    #[must_use]
    pub fn candidates(&self) -> Candidates<'_> {
        Candidates {
            chunks: self.bytes.chunks_exact(SIGNATURE_LENGTH),
        }
    }
}

impl<'a> IntoIterator for &'a SignatureBlob {
    type Item = EcdsaSignature;
    type IntoIter = Candidates<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates()
    }
}

/// Ordered pass over the signatures of a blob.
#[derive(Clone, Debug)]
pub struct Candidates<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl Iterator for Candidates<'_> {
    type Item = EcdsaSignature;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: &[u8; SIGNATURE_LENGTH] = self.chunks.next()?.try_into().ok()?;
        let mut signature = EcdsaSignature::from_bytes(chunk);
        signature.v = normalize_recovery_id(signature.v);
        Some(signature)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Candidates<'_> {}

impl FusedIterator for Candidates<'_> {}

/// Map a raw 0/1 recovery id to 27/28. Other values pass through unchanged
/// and fail recovery later.
#[must_use]
pub fn normalize_recovery_id(v: u8) -> u8 {
    match v {
        0 | 1 => v + RECOVERY_ID_OFFSET,
        _ => v,
    }
}
