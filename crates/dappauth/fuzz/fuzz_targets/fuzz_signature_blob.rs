//! Fuzz target for signature blob decoding and signer recovery.
//!
//! Arbitrary hex from callers must never panic the codec or the recovery
//! primitive, whatever its length or recovery id.
//!
//! ## Running
//!
//! ```bash
//! cd crates/dappauth
//! cargo +nightly fuzz run fuzz_signature_blob
//! ```

#![no_main]

use dappauth::{personal_message_hash, recover_address, SignatureBlob, SIGNATURE_LENGTH};
use libfuzzer_sys::fuzz_target;

/// Fuzz input structure for blob decoding.
#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    /// Challenge the signature claims to cover
    challenge: Vec<u8>,
    /// Candidate signature text (usually not valid hex)
    signature_hex: String,
    /// Raw blob bytes, hex-encoded before decoding
    raw: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let digest = personal_message_hash(&input.challenge);

    // 1. Free-form text either decodes to whole signatures or errors
    if let Ok(blob) = SignatureBlob::from_hex(&input.signature_hex) {
        assert_eq!(blob.as_bytes().len(), blob.len() * SIGNATURE_LENGTH);
    }

    // 2. Well-formed hex of any length obeys the 65-byte rule
    let encoded = hex::encode(&input.raw);
    match SignatureBlob::from_hex(&encoded) {
        Ok(blob) => {
            assert!(!input.raw.is_empty());
            assert_eq!(input.raw.len() % SIGNATURE_LENGTH, 0);

            // 3. Candidates are restartable and recovery never panics
            assert_eq!(blob.candidates().count(), blob.candidates().len());
            for candidate in blob.candidates() {
                // 0/1 are always normalized away
                assert!(candidate.v > 1);
                let first = recover_address(&digest, &candidate);
                let second = recover_address(&digest, &candidate);
                assert_eq!(first, second);
            }
        }
        Err(_) => assert!(input.raw.is_empty() || input.raw.len() % SIGNATURE_LENGTH != 0),
    }
});
