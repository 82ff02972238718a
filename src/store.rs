//! Persisted registry state.
//!
//! One record per registered name plus the reverse token index. The store is
//! an injectable value owned by the façade, initialized empty and mutated
//! only through the component operations; snapshots are the persistence
//! boundary for whatever environment hosts the registry.

use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::{RegistryError, Result};
use crate::state::{NameRecord, TokenId};

#[derive(BorshSerialize, BorshDeserialize, Debug, Default)]
pub struct RegistryStore {
    names: BTreeMap<String, NameRecord>,
    tokens: BTreeMap<TokenId, String>,
    next_token_id: TokenId,
}

impl RegistryStore {
    pub fn new() -> Self {
        Self {
            names: BTreeMap::new(),
            tokens: BTreeMap::new(),
            // Token id 0 is never issued.
            next_token_id: 1,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<&NameRecord> {
        self.names.get(name).ok_or_else(|| RegistryError::UnknownName {
            name: name.to_string(),
        })
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut NameRecord> {
        self.names
            .get_mut(name)
            .ok_or_else(|| RegistryError::UnknownName {
                name: name.to_string(),
            })
    }

    pub fn get_by_token(&self, token_id: TokenId) -> Result<&NameRecord> {
        let name = self
            .tokens
            .get(&token_id)
            .ok_or(RegistryError::UnknownToken { token_id })?;
        self.get(name)
    }

    /// Next token id; monotonic, never reused even if a name were released.
    pub fn allocate_token_id(&mut self) -> TokenId {
        let id = self.next_token_id;
        self.next_token_id += 1;
        id
    }

    /// Insert a freshly assigned record together with its reverse index row.
    /// Callers must have checked name uniqueness first.
    pub fn insert(&mut self, record: NameRecord) {
        self.tokens.insert(record.token_id, record.name.clone());
        self.names.insert(record.name.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn snapshot(&self) -> Result<Vec<u8>> {
        self.try_to_vec()
            .map_err(|e| RegistryError::Serialization(e.to_string()))
    }

    pub fn from_snapshot(bytes: &[u8]) -> Result<Self> {
        Self::try_from_slice(bytes).map_err(|e| RegistryError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lock::EditLock;
    use crate::state::{AccountId, ChainAddress};

    fn record(name: &str, token_id: TokenId) -> NameRecord {
        NameRecord {
            name: name.to_string(),
            token_id,
            owner: AccountId::new([7; 32]),
            registered_at: 1_000,
            lock: EditLock::new(1_000),
            addresses: vec![ChainAddress {
                chain: 1,
                address: "0xabc".to_string(),
            }],
        }
    }

    #[test]
    fn token_ids_are_monotonic() {
        let mut store = RegistryStore::new();
        assert_eq!(store.allocate_token_id(), 1);
        assert_eq!(store.allocate_token_id(), 2);
        assert_eq!(store.allocate_token_id(), 3);
    }

    #[test]
    fn reverse_index_follows_insert() {
        let mut store = RegistryStore::new();
        let id = store.allocate_token_id();
        store.insert(record("alice", id));

        assert_eq!(store.get("alice").unwrap().token_id, id);
        assert_eq!(store.get_by_token(id).unwrap().name, "alice");
        assert_eq!(
            store.get_by_token(99).unwrap_err(),
            RegistryError::UnknownToken { token_id: 99 }
        );
    }

    #[test]
    fn snapshot_preserves_counter_and_records() {
        let mut store = RegistryStore::new();
        let id = store.allocate_token_id();
        store.insert(record("alice", id));

        let bytes = store.snapshot().unwrap();
        let mut restored = RegistryStore::from_snapshot(&bytes).unwrap();

        assert_eq!(restored.len(), 1);
        assert_eq!(restored.get("alice").unwrap().token_id, id);
        // The counter survives: no token id reuse after a restore.
        assert_eq!(restored.allocate_token_id(), 2);
    }

    #[test]
    fn corrupt_snapshot_is_rejected() {
        let err = RegistryStore::from_snapshot(&[0xff, 0x01]).unwrap_err();
        assert!(matches!(err, RegistryError::Serialization(_)));
    }
}
