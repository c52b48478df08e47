//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the authenticator.

use crate::domain::errors::AuthError;
use async_trait::async_trait;

/// Signer authorization API.
///
/// Implementations must be thread-safe (`Send + Sync`) and stateless between
/// calls.
#[async_trait]
pub trait AuthorizationApi: Send + Sync {
    /// Decide whether `signature_hex` over `challenge` proves control of
    /// `claimed_address_hex`.
    ///
    /// # Returns
    /// * `Ok(true)` - The signer is authorized
    /// * `Ok(false)` - The signature does not prove authorization
    ///
    /// # Errors
    /// * `AuthError::InvalidAddress` - Address is not 40 hex digits
    /// * `AuthError::MalformedSignature` - Blob is not hex or not a multiple of 65 bytes
    /// * `AuthError::ChainLookupFailed` - Could not classify the address
    /// * `AuthError::ContractCallFailed` - The wallet contract call failed
    async fn is_authorized_signer(
        &self,
        challenge: &str,
        signature_hex: &str,
        claimed_address_hex: &str,
    ) -> Result<bool, AuthError>;
}
