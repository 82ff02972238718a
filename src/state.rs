//! Core record types held by the registry store.

use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};

use crate::lock::EditLock;

/// Token handle representing ownership of a name.
pub type TokenId = u64;

/// Opaque chain namespace identifier chosen by the caller (e.g. 1 = ETH,
/// 2 = BTC). The registry attaches no semantics to it.
pub type ChainId = u64;

/// Authenticated caller identity, resolved by the dispatch layer before a
/// call reaches the registry.
#[derive(
    BorshSerialize, BorshDeserialize, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct AccountId([u8; 32]);

impl AccountId {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for AccountId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// One chain-to-address binding within a name's address book.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChainAddress {
    pub chain: ChainId,
    pub address: String,
}

/// Everything the registry persists for one registered name.
///
/// `addresses` keeps first-insertion order per chain id; a later write for an
/// already-bound chain replaces the value in place.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub struct NameRecord {
    pub name: String,
    pub token_id: TokenId,
    pub owner: AccountId,
    pub registered_at: i64,
    pub lock: EditLock,
    pub addresses: Vec<ChainAddress>,
}
