//! # Authenticator Service
//!
//! Application service layer that implements the `AuthorizationApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`AuthorizationApi`)
//! - Uses the outbound ports (`ChainClient`, `ContractValidator`) for chain access
//! - Delegates hashing, decoding and recovery to the domain layer
//!
//! ## Verification Paths
//!
//! | Account  | Digest                                       | Check                          |
//! |----------|----------------------------------------------|--------------------------------|
//! | EOA      | `personal_message_hash(challenge)`           | first signature recovers to it |
//! | Contract | `erc191_hash(keccak256(challenge), address)` | any candidate accepted by it   |

use crate::config::{AuthenticatorConfig, ConfigError};
use crate::domain::codec::SignatureBlob;
use crate::domain::ecdsa::recover_address;
use crate::domain::entities::{strip_hex_prefix, AccountKind, Address};
use crate::domain::errors::{AuthError, CodecError};
use crate::domain::hashing::{erc191_hash, keccak256, personal_message_hash};
use crate::ports::inbound::AuthorizationApi;
use crate::ports::outbound::{ChainClient, ContractValidator};
use async_trait::async_trait;
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

/// Signer authorization service.
///
/// Holds only its collaborators and immutable configuration, so one instance
/// can serve concurrent callers.
pub struct Authenticator<C: ChainClient, V: ContractValidator> {
    chain: C,
    validator: V,
    config: AuthenticatorConfig,
}

impl<C: ChainClient, V: ContractValidator> Authenticator<C, V> {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `chain` - Tells EOAs (no code) from contract wallets
    /// * `validator` - Asks contract wallets whether a signature is valid
    pub fn new(chain: C, validator: V) -> Self {
        Self {
            chain,
            validator,
            config: AuthenticatorConfig::default(),
        }
    }

    /// Replace the default configuration.
    pub fn with_config(mut self, config: AuthenticatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Get the active configuration.
    pub fn config(&self) -> &AuthenticatorConfig {
        &self.config
    }

    /// Decide whether `signature_hex` over `challenge` proves control of
    /// `claimed_address_hex`.
    ///
    /// Input is validated before any hashing or chain access. A signature
    /// that does not prove authorization is `Ok(false)`; only bad input and
    /// collaborator failures are errors.
    pub async fn is_authorized_signer(
        &self,
        challenge: &str,
        signature_hex: &str,
        claimed_address_hex: &str,
    ) -> Result<bool, AuthError> {
        let claimed = Address::from_hex(claimed_address_hex).map_err(|reason| {
            AuthError::InvalidAddress {
                input: claimed_address_hex.to_string(),
                reason,
            }
        })?;
        let blob = self.decode_signature(signature_hex)?;

        let kind = self.chain.account_kind(claimed).await.map_err(|e| {
            warn!(address = %claimed, error = %e, "Account classification failed");
            AuthError::ChainLookupFailed(e)
        })?;

        match kind {
            AccountKind::Eoa => Ok(self.verify_eoa(challenge.as_bytes(), &blob, claimed)),
            AccountKind::Contract => {
                self.verify_contract(challenge.as_bytes(), &blob, claimed)
                    .await
            }
        }
    }

    /// Decode the blob and apply the configured limits.
    fn decode_signature(&self, signature_hex: &str) -> Result<SignatureBlob, CodecError> {
        if !self.config.accept_hex_prefix && strip_hex_prefix(signature_hex) != signature_hex {
            return Err(CodecError::PrefixNotAccepted);
        }

        let blob = SignatureBlob::from_hex(signature_hex)?;
        if blob.len() > self.config.max_signature_candidates {
            return Err(CodecError::TooManyCandidates {
                count: blob.len(),
                max: self.config.max_signature_candidates,
            });
        }
        Ok(blob)
    }

    /// EOA path: the first signature must recover to the claimed address.
    /// Later signatures are ignored; one key controls an EOA.
    fn verify_eoa(&self, challenge: &[u8], blob: &SignatureBlob, claimed: Address) -> bool {
        let digest = personal_message_hash(challenge);
        let Some(signature) = blob.first() else {
            return false;
        };

        let authorized: bool = match recover_address(&digest, &signature) {
            Ok(recovered) => recovered
                .as_bytes()
                .as_slice()
                .ct_eq(claimed.as_bytes().as_slice())
                .into(),
            Err(e) => {
                debug!(address = %claimed, reason = %e, "EOA signature not recoverable");
                false
            }
        };

        debug!(address = %claimed, authorized, "EOA verification complete");
        authorized
    }

    /// Contract path: forward candidates in blob order until one is accepted.
    async fn verify_contract(
        &self,
        challenge: &[u8],
        blob: &SignatureBlob,
        claimed: Address,
    ) -> Result<bool, AuthError> {
        // Hashed first so the raw challenge never reaches the node.
        let digest = erc191_hash(&keccak256(challenge), &claimed);

        for (index, candidate) in blob.candidates().enumerate() {
            let accepted = self
                .validator
                .is_valid_signature(claimed, digest, &candidate.to_bytes())
                .await
                .map_err(|e| {
                    warn!(
                        address = %claimed,
                        index,
                        error = %e,
                        "Contract signature validation failed"
                    );
                    AuthError::ContractCallFailed(e)
                })?;

            if accepted {
                debug!(address = %claimed, index, "Contract accepted signature");
                return Ok(true);
            }
        }

        debug!(
            address = %claimed,
            candidates = blob.len(),
            "Contract rejected every signature"
        );
        Ok(false)
    }
}

#[async_trait]
impl<C: ChainClient, V: ContractValidator> AuthorizationApi for Authenticator<C, V> {
    async fn is_authorized_signer(
        &self,
        challenge: &str,
        signature_hex: &str,
        claimed_address_hex: &str,
    ) -> Result<bool, AuthError> {
        Authenticator::is_authorized_signer(self, challenge, signature_hex, claimed_address_hex)
            .await
    }
}

// =============================================================================
// TESTS
// =============================================================================
