//! # Authenticator Configuration
//!
//! # Example
//!
//! ```ignore
//! use dappauth::AuthenticatorConfig;
//!
//! let config = AuthenticatorConfig::default()
//!     .with_max_signature_candidates(4)
//!     .with_accept_hex_prefix(false);
//! config.validate().expect("valid config");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on concatenated signatures in one blob.
pub const DEFAULT_MAX_SIGNATURE_CANDIDATES: usize = 16;

/// Invalid configuration values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_signature_candidates must be at least 1")]
    NoCandidatesAllowed,
}

/// Authenticator configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthenticatorConfig {
    /// Upper bound on signatures in one blob. Each one can cost a contract
    /// call, so a larger blob is rejected as malformed.
    pub max_signature_candidates: usize,

    /// Accept a `0x` prefix on the signature hex.
    pub accept_hex_prefix: bool,
}

impl Default for AuthenticatorConfig {
    fn default() -> Self {
        Self {
            max_signature_candidates: DEFAULT_MAX_SIGNATURE_CANDIDATES,
            accept_hex_prefix: true,
        }
    }
}

impl AuthenticatorConfig {
    /// Create a config for testing (small candidate limit).
    pub fn for_testing() -> Self {
        Self {
            max_signature_candidates: 4,
            accept_hex_prefix: true,
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_signature_candidates == 0 {
            return Err(ConfigError::NoCandidatesAllowed);
        }
        Ok(())
    }

    /// Builder-style method to set the candidate limit
    pub fn with_max_signature_candidates(mut self, max: usize) -> Self {
        self.max_signature_candidates = max;
        self
    }

    /// Builder-style method to allow or forbid the `0x` prefix
    pub fn with_accept_hex_prefix(mut self, accept: bool) -> Self {
        self.accept_hex_prefix = accept;
        self
    }
}
