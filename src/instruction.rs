//! Wire-level call surface.
//!
//! The dispatch layer hands the registry a borsh-encoded [`RegistryCall`]
//! together with the authenticated caller identity, and receives a
//! borsh-encoded [`CallOutput`] back. This is the only place the two-array
//! `chains`/`addrs` form exists; it is paired (and length-checked) before
//! reaching the typed registry API.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::{RegistryError, Result};
use crate::state::{AccountId, ChainId, TokenId};

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub enum RegistryCall {
    /// Claim an unused name for the caller and bind its initial addresses.
    Register {
        name: String,
        chains: Vec<ChainId>,
        addrs: Vec<String>,
    },

    /// Rebind addresses for an unlocked name; re-arms the edit lock.
    UpdateAddresses {
        name: String,
        chains: Vec<ChainId>,
        addrs: Vec<String>,
    },

    /// Release the edit lock once the cooldown has elapsed.
    UnlockUpdate { name: String },

    /// Resolve one chain binding.
    GetAddressForChain { name: String, chain: ChainId },

    /// Resolve every binding, in first-insertion chain order.
    GetAllAddresses { name: String },

    /// Owner identity behind a token id.
    OwnerOf { token_id: TokenId },

    /// Token id bound to a name.
    NameToTokenId { name: String },
}

impl RegistryCall {
    pub fn unpack(input: &[u8]) -> Result<Self> {
        Self::try_from_slice(input).map_err(|_| RegistryError::MalformedCall)
    }

    pub fn pack(&self) -> Result<Vec<u8>> {
        self.try_to_vec()
            .map_err(|e| RegistryError::Serialization(e.to_string()))
    }
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum CallOutput {
    Unit,
    TokenId(TokenId),
    Address(String),
    Addresses(Vec<String>),
    Owner(AccountId),
}

impl CallOutput {
    pub fn pack(&self) -> Result<Vec<u8>> {
        self.try_to_vec()
            .map_err(|e| RegistryError::Serialization(e.to_string()))
    }

    pub fn unpack(input: &[u8]) -> Result<Self> {
        Self::try_from_slice(input).map_err(|_| RegistryError::MalformedCall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_call_survives_the_wire() {
        let call = RegistryCall::Register {
            name: "alice".to_string(),
            chains: vec![1, 2],
            addrs: vec!["0x12".to_string(), "bc1q".to_string()],
        };
        let bytes = call.pack().unwrap();
        match RegistryCall::unpack(&bytes).unwrap() {
            RegistryCall::Register { name, chains, addrs } => {
                assert_eq!(name, "alice");
                assert_eq!(chains, vec![1, 2]);
                assert_eq!(addrs.len(), 2);
            }
            other => panic!("unexpected call: {other:?}"),
        }
    }

    #[test]
    fn garbage_payload_is_malformed() {
        assert_eq!(
            RegistryCall::unpack(&[0xde, 0xad]).unwrap_err(),
            RegistryError::MalformedCall
        );
    }
}
