//! # In-Memory Chain
//!
//! Deterministic stand-in for a node: deployed code per address plus a
//! contract-wallet simulator. A simulated wallet accepts a signature when it
//! recovers to one of the wallet's owner keys over the given digest.
//!
//! Implements every outbound port, so it can back an `Authenticator`
//! directly (`ContractValidator`) or behind an `Erc1271Validator`
//! (`ContractCaller`, speaking the real ABI).

use super::erc1271::{decode_is_valid_signature, encode_magic_value};
use crate::domain::codec::SIGNATURE_LENGTH;
use crate::domain::ecdsa::recover_address;
use crate::domain::entities::{Address, EcdsaSignature, Hash};
use crate::ports::outbound::{
    ChainClient, ChainError, ContractCaller, ContractValidator, ValidatorError,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, trace};

/// Placeholder runtime code marking a simulated wallet as deployed.
pub const WALLET_CODE: &[u8] = &[0x60, 0x80, 0x60, 0x40, 0x52];

#[derive(Debug, Default)]
struct Account {
    code: Vec<u8>,
    owners: HashSet<Address>,
    failing: bool,
}

/// In-memory chain state with simulated contract wallets.
#[derive(Debug, Default)]
pub struct InMemoryChain {
    accounts: RwLock<HashMap<Address, Account>>,
    validation_calls: AtomicUsize,
}

impl InMemoryChain {
    /// Create an empty chain where every address is an EOA.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploy a simulated wallet at `wallet` controlled by `owners`.
    pub fn deploy_wallet(&self, wallet: Address, owners: impl IntoIterator<Item = Address>) {
        let mut accounts = self.accounts.write();
        let account = accounts.entry(wallet).or_default();
        account.code = WALLET_CODE.to_vec();
        account.owners = owners.into_iter().collect();
    }

    /// Set arbitrary code at `address`. Empty code turns it back into an EOA.
    pub fn set_code(&self, address: Address, code: Vec<u8>) {
        self.accounts.write().entry(address).or_default().code = code;
    }

    /// Authorize another key on an existing wallet.
    pub fn add_owner(&self, wallet: Address, owner: Address) {
        self.accounts.write().entry(wallet).or_default().owners.insert(owner);
    }

    /// Revoke a key. Returns whether it was an owner.
    pub fn remove_owner(&self, wallet: Address, owner: Address) -> bool {
        self.accounts
            .write()
            .get_mut(&wallet)
            .is_some_and(|account| account.owners.remove(&owner))
    }

    /// Make every validation against `wallet` fail at the transport level.
    pub fn set_failing(&self, wallet: Address, failing: bool) {
        self.accounts.write().entry(wallet).or_default().failing = failing;
    }

    /// Number of signature validations served so far.
    pub fn validation_calls(&self) -> usize {
        self.validation_calls.load(Ordering::SeqCst)
    }

    /// Run the wallet's validation logic.
    ///
    /// A missing wallet answers with empty return data, as a codeless
    /// address does on a real node.
    fn validate(
        &self,
        wallet: Address,
        digest: &Hash,
        signature: &[u8],
    ) -> Result<Option<bool>, ChainError> {
        self.validation_calls.fetch_add(1, Ordering::SeqCst);

        let accounts = self.accounts.read();
        let account = match accounts.get(&wallet) {
            Some(account) if !account.code.is_empty() => account,
            _ => return Ok(None),
        };
        if account.failing {
            return Err(ChainError::Transport("simulated node failure".to_string()));
        }

        let Ok(bytes) = <&[u8; SIGNATURE_LENGTH]>::try_from(signature) else {
            trace!(wallet = %wallet, len = signature.len(), "Rejecting odd-sized signature");
            return Ok(Some(false));
        };

        let accepted = recover_address(digest, &EcdsaSignature::from_bytes(bytes))
            .is_ok_and(|signer| account.owners.contains(&signer));

        debug!(wallet = %wallet, accepted, "Simulated wallet validated signature");
        Ok(Some(accepted))
    }
}

#[async_trait]
impl ChainClient for InMemoryChain {
    async fn code_at(&self, address: Address) -> Result<Vec<u8>, ChainError> {
        Ok(self
            .accounts
            .read()
            .get(&address)
            .map(|account| account.code.clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl ContractValidator for InMemoryChain {
    async fn is_valid_signature(
        &self,
        contract: Address,
        digest: Hash,
        signature: &[u8],
    ) -> Result<bool, ValidatorError> {
        match self.validate(contract, &digest, signature)? {
            Some(accepted) => Ok(accepted),
            None => Err(ValidatorError::UnexpectedReturnData { len: 0 }),
        }
    }
}

#[async_trait]
impl ContractCaller for InMemoryChain {
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, ChainError> {
        let Some((digest, signature)) = decode_is_valid_signature(&data) else {
            return Err(ChainError::Reverted("unknown function selector".to_string()));
        };

        Ok(self
            .validate(to, &digest, &signature)?
            .map(encode_magic_value)
            .unwrap_or_default())
    }
}
