//! # DappAuth
//!
//! Decides whether a signature over a challenge proves that the signer controls
//! a claimed address, for both externally-owned accounts (EOA) and
//! smart-contract wallets (ERC-1271 / ERC-1654).
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Hashing, signature codec, key recovery. No I/O
//! - **Ports Layer** (`ports/`): Inbound API and outbound collaborator traits
//! - **Adapters Layer** (`adapters/`): ERC-1271 ABI validator, in-memory chain
//! - **Service Layer** (`service.rs`): The `Authenticator` decision procedure
//!
//! ## Example
//!
//! ```ignore
//! use dappauth::{Authenticator, Erc1271Validator};
//!
//! let authenticator = Authenticator::new(rpc.clone(), Erc1271Validator::new(rpc));
//! match authenticator.is_authorized_signer("challenge", &sig_hex, &addr_hex).await {
//!     Ok(true) => { /* authorized */ }
//!     Ok(false) => { /* not authorized */ }
//!     Err(e) => { /* bad input or the chain could not be asked */ }
//! }
//! ```
//!
//! ## Security Notes
//!
//! - A collaborator failure is never reported as `Ok(false)`; callers must
//!   branch on the error first.
//! - Contract digests are bound to the verifying contract (EIP-191 version 0x00)
//!   so a signature for one wallet cannot be replayed against another.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::erc1271::{Erc1271Validator, ERC1271_MAGIC_VALUE, IS_VALID_SIGNATURE_SELECTOR};
pub use adapters::memory::InMemoryChain;
pub use config::AuthenticatorConfig;
pub use domain::codec::{SignatureBlob, SIGNATURE_LENGTH};
pub use domain::ecdsa::{address_from_pubkey, recover_address};
pub use domain::entities::{AccountKind, Address, EcdsaSignature, Hash};
pub use domain::errors::{AddressError, AuthError, CodecError, SignatureError};
pub use domain::hashing::{erc191_hash, keccak256, personal_message_hash};
pub use ports::inbound::AuthorizationApi;
pub use ports::outbound::{
    ChainClient, ChainError, ContractCaller, ContractValidator, ValidatorError,
};
pub use service::Authenticator;
