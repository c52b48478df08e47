//! # ERC-1271 Contract Validator
//!
//! `ContractValidator` over a raw `eth_call` capability. Encodes
//! `isValidSignature(bytes32,bytes)` exactly as deployed wallets expect it
//! and checks for the `0x1626ba7e` magic value in the reply.
//!
//! ## Wire Format
//!
//! ```text
//! calldata = 0x1626ba7e
//!          || digest                      (32 bytes)
//!          || 0x40                        (32 bytes, offset of `bytes`)
//!          || len(signature)              (32 bytes)
//!          || signature, zero-padded      (ceil(len / 32) * 32 bytes)
//!
//! return   = bytes4 magic, left-aligned in one 32-byte word
//! ```
//!
//! ERC-1654 and the final ERC-1271 share this selector.

use crate::domain::entities::{Address, Hash};
use crate::ports::outbound::{ContractCaller, ContractValidator, ValidatorError};
use alloy_primitives::{Bytes, FixedBytes, B256};
use alloy_sol_types::{sol, SolCall};
use async_trait::async_trait;
use tracing::debug;

sol! {
    /// ERC-1271 entry point of a contract wallet.
    function isValidSignature(bytes32 hash, bytes signature) external view returns (bytes4 magicValue);
}

/// `bytes4(keccak256("isValidSignature(bytes32,bytes)"))`
pub const IS_VALID_SIGNATURE_SELECTOR: [u8; 4] = isValidSignatureCall::SELECTOR;

/// Value a wallet returns when it accepts the signature.
pub const ERC1271_MAGIC_VALUE: [u8; 4] = IS_VALID_SIGNATURE_SELECTOR;

/// Validates signatures by calling the wallet contract.
#[derive(Clone, Debug)]
pub struct Erc1271Validator<C: ContractCaller> {
    caller: C,
}

impl<C: ContractCaller> Erc1271Validator<C> {
    /// Create a validator over the given contract caller.
    pub fn new(caller: C) -> Self {
        Self { caller }
    }

    /// Get a reference to the underlying caller.
    pub fn caller(&self) -> &C {
        &self.caller
    }
}

#[async_trait]
impl<C: ContractCaller> ContractValidator for Erc1271Validator<C> {
    async fn is_valid_signature(
        &self,
        contract: Address,
        digest: Hash,
        signature: &[u8],
    ) -> Result<bool, ValidatorError> {
        let calldata = encode_is_valid_signature(&digest, signature);
        let returned = self.caller.call(contract, calldata).await?;
        let accepted = decode_magic_value(&returned)?;

        debug!(
            contract = %contract,
            accepted,
            "isValidSignature returned"
        );

        Ok(accepted)
    }
}

// =============================================================================
// ABI CODEC
// =============================================================================

/// Encode an `isValidSignature(bytes32,bytes)` call.
pub fn encode_is_valid_signature(digest: &Hash, signature: &[u8]) -> Vec<u8> {
    isValidSignatureCall {
        hash: B256::from(*digest),
        signature: Bytes::copy_from_slice(signature),
    }
    .abi_encode()
}

/// Decode `isValidSignature(bytes32,bytes)` calldata into its arguments.
///
/// Returns `None` for a different selector or malformed encoding.
pub fn decode_is_valid_signature(data: &[u8]) -> Option<(Hash, Vec<u8>)> {
    let call = isValidSignatureCall::abi_decode(data, true).ok()?;
    Some((call.hash.0, call.signature.to_vec()))
}

/// Encode the `bytes4` reply of a wallet.
pub fn encode_magic_value(accepted: bool) -> Vec<u8> {
    let magic = if accepted { ERC1271_MAGIC_VALUE } else { [0u8; 4] };
    isValidSignatureCall::abi_encode_returns(&(FixedBytes::<4>::from(magic),))
}

/// Check a wallet's reply for the magic value.
///
/// Anything that does not decode as one ABI word cannot be a `bytes4` and is
/// an error, not a rejection.
pub fn decode_magic_value(returned: &[u8]) -> Result<bool, ValidatorError> {
    let reply = isValidSignatureCall::abi_decode_returns(returned, false).map_err(|_| {
        ValidatorError::UnexpectedReturnData {
            len: returned.len(),
        }
    })?;
    Ok(reply.magicValue.0 == ERC1271_MAGIC_VALUE)
}
