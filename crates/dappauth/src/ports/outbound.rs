//! # Outbound Ports (Driven Ports / SPI)
//!
//! Chain collaborators the authenticator depends on. Live implementations
//! talk to a node; tests substitute in-memory doubles.

use crate::domain::entities::{AccountKind, Address, Hash};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Error from chain state reads and contract calls.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChainError {
    /// The node could not be reached or did not answer
    #[error("Transport error: {0}")]
    Transport(String),

    /// The call reverted
    #[error("Execution reverted: {0}")]
    Reverted(String),

    /// The node answered with something unusable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Error from a contract wallet's signature validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidatorError {
    /// The underlying contract call failed
    #[error("isValidSignature call failed: {0}")]
    Call(#[from] ChainError),

    /// The contract returned data that is not an ABI-encoded bytes4
    #[error("Unexpected return data ({len} bytes)")]
    UnexpectedReturnData { len: usize },
}

/// Read access to deployed code, used to tell EOAs from contract wallets.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Deployed bytecode at `address`; empty for an EOA.
    async fn code_at(&self, address: Address) -> Result<Vec<u8>, ChainError>;

    /// Classify `address` by whether it has deployed code.
    async fn account_kind(&self, address: Address) -> Result<AccountKind, ChainError> {
        let code = self.code_at(address).await?;
        Ok(AccountKind::from_code(&code))
    }
}

/// The `isValidSignature` capability of a contract wallet.
///
/// Called once per candidate signature; must be read-only.
#[async_trait]
pub trait ContractValidator: Send + Sync {
    /// Ask `contract` whether `signature` is valid for `digest`.
    ///
    /// # Returns
    /// * `Ok(true)` - The contract accepts the signature
    /// * `Ok(false)` - The contract rejects the signature
    ///
    /// # Errors
    /// Any failure of the call itself. It is never folded into `Ok(false)`.
    async fn is_valid_signature(
        &self,
        contract: Address,
        digest: Hash,
        signature: &[u8],
    ) -> Result<bool, ValidatorError>;
}

/// Read-only contract call (`eth_call`) against the latest state.
#[async_trait]
pub trait ContractCaller: Send + Sync {
    /// Execute `data` against `to` and return the raw return data.
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, ChainError>;
}

#[async_trait]
impl<T: ChainClient + ?Sized> ChainClient for Arc<T> {
    async fn code_at(&self, address: Address) -> Result<Vec<u8>, ChainError> {
        (**self).code_at(address).await
    }

    async fn account_kind(&self, address: Address) -> Result<AccountKind, ChainError> {
        (**self).account_kind(address).await
    }
}

#[async_trait]
impl<T: ContractValidator + ?Sized> ContractValidator for Arc<T> {
    async fn is_valid_signature(
        &self,
        contract: Address,
        digest: Hash,
        signature: &[u8],
    ) -> Result<bool, ValidatorError> {
        (**self).is_valid_signature(contract, digest, signature).await
    }
}

#[async_trait]
impl<T: ContractCaller + ?Sized> ContractCaller for Arc<T> {
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, ChainError> {
        (**self).call(to, data).await
    }
}
