//! Ownership ledger: token-id based ownership of names.
//!
//! The `name <-> token_id` mapping is a bijection for the life of the
//! registry; ids come from the store's monotonic counter and are never
//! reassigned.

use crate::error::{RegistryError, Result};
use crate::lock::EditLock;
use crate::state::{AccountId, NameRecord, TokenId};
use crate::store::RegistryStore;

/// Bind `name` to a fresh token id owned by `owner`. The record starts with
/// an empty address book and an armed edit lock; `registered_at` is set once
/// here and never mutated.
pub fn assign(
    store: &mut RegistryStore,
    name: &str,
    owner: AccountId,
    now: i64,
) -> Result<TokenId> {
    if store.contains(name) {
        return Err(RegistryError::AlreadyRegistered {
            name: name.to_string(),
        });
    }

    let token_id = store.allocate_token_id();
    store.insert(NameRecord {
        name: name.to_string(),
        token_id,
        owner,
        registered_at: now,
        lock: EditLock::new(now),
        addresses: Vec::new(),
    });

    Ok(token_id)
}

pub fn owner_of(store: &RegistryStore, token_id: TokenId) -> Result<AccountId> {
    Ok(store.get_by_token(token_id)?.owner)
}

pub fn token_id_of(store: &RegistryStore, name: &str) -> Result<TokenId> {
    Ok(store.get(name)?.token_id)
}

/// Owner gate for mutating operations.
pub fn require_owner(store: &RegistryStore, name: &str, caller: &AccountId) -> Result<()> {
    let record = store.get(name)?;
    if record.owner != *caller {
        return Err(RegistryError::NotOwner {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(tag: u8) -> AccountId {
        AccountId::new([tag; 32])
    }

    #[test]
    fn assign_allocates_distinct_ids() {
        let mut store = RegistryStore::new();
        let a = assign(&mut store, "alice", owner(1), 0).unwrap();
        let b = assign(&mut store, "bob", owner(2), 0).unwrap();
        assert_ne!(a, b);
        assert_eq!(token_id_of(&store, "alice").unwrap(), a);
        assert_eq!(owner_of(&store, b).unwrap(), owner(2));
    }

    #[test]
    fn assign_rejects_live_binding() {
        let mut store = RegistryStore::new();
        assign(&mut store, "alice", owner(1), 0).unwrap();
        let err = assign(&mut store, "alice", owner(2), 5).unwrap_err();
        assert_eq!(
            err,
            RegistryError::AlreadyRegistered {
                name: "alice".to_string()
            }
        );
        // Rejection leaves the prior binding untouched.
        assert_eq!(owner_of(&store, 1).unwrap(), owner(1));
        assert_eq!(store.get("alice").unwrap().registered_at, 0);
    }

    #[test]
    fn lookups_fail_on_unknown_handles() {
        let store = RegistryStore::new();
        assert_eq!(
            token_id_of(&store, "nobody").unwrap_err(),
            RegistryError::UnknownName {
                name: "nobody".to_string()
            }
        );
        assert_eq!(
            owner_of(&store, 7).unwrap_err(),
            RegistryError::UnknownToken { token_id: 7 }
        );
    }

    #[test]
    fn require_owner_gates_on_identity() {
        let mut store = RegistryStore::new();
        assign(&mut store, "alice", owner(1), 0).unwrap();
        assert!(require_owner(&store, "alice", &owner(1)).is_ok());
        assert_eq!(
            require_owner(&store, "alice", &owner(9)).unwrap_err(),
            RegistryError::NotOwner {
                name: "alice".to_string()
            }
        );
    }
}
