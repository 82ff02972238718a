//! Registry façade: composes the ownership ledger, the address book and the
//! edit lock into the externally visible contract.
//!
//! Every operation validates fully before mutating, so a failed call leaves
//! the store exactly as it found it. The hosting environment is expected to
//! invoke calls one at a time; [`SharedRegistry`] provides that serialization
//! for standalone deployments.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::address_book;
use crate::clock::{Clock, SystemClock};
use crate::error::{RegistryError, Result};
use crate::instruction::{CallOutput, RegistryCall};
use crate::ledger;
use crate::lock::LockState;
use crate::state::{AccountId, ChainId, TokenId};
use crate::store::RegistryStore;
use crate::validation;

pub struct NameRegistry<C: Clock = SystemClock> {
    store: RegistryStore,
    clock: C,
}

impl NameRegistry<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for NameRegistry<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> NameRegistry<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            store: RegistryStore::new(),
            clock,
        }
    }

    /// Rehydrate a registry from a store snapshot.
    pub fn from_snapshot(bytes: &[u8], clock: C) -> Result<Self> {
        Ok(Self {
            store: RegistryStore::from_snapshot(bytes)?,
            clock,
        })
    }

    /// Serialize the full registry state for persistence.
    pub fn snapshot(&self) -> Result<Vec<u8>> {
        self.store.snapshot()
    }

    /// Claim `name` for `caller` and bind its initial addresses. The name is
    /// resolvable immediately; the lock only gates future edits.
    pub fn register(
        &mut self,
        caller: AccountId,
        name: &str,
        bindings: &[(ChainId, String)],
    ) -> Result<TokenId> {
        validation::validate_name(name)?;
        let now = self.clock.now();
        let token_id = ledger::assign(&mut self.store, name, caller, now)?;
        address_book::set_addresses(self.store.get_mut(name)?, bindings);

        debug!(name, token_id, owner = %caller, "registered name");
        Ok(token_id)
    }

    /// Rebind addresses for an unlocked name, then re-arm the lock from the
    /// edit time. Ownership is checked before the lock, so a non-owner sees
    /// `NotOwner` regardless of lock state.
    pub fn update_addresses(
        &mut self,
        caller: AccountId,
        name: &str,
        bindings: &[(ChainId, String)],
    ) -> Result<()> {
        ledger::require_owner(&self.store, name, &caller)?;
        let now = self.clock.now();
        let record = self.store.get_mut(name)?;
        if !record.lock.is_unlocked() {
            return Err(RegistryError::EditLocked {
                name: name.to_string(),
            });
        }

        address_book::set_addresses(record, bindings);
        record.lock.rearm(now);

        debug!(name, bindings = bindings.len(), "addresses updated, lock re-armed");
        Ok(())
    }

    /// Release the edit lock once the cooldown has elapsed.
    pub fn unlock_update(&mut self, caller: AccountId, name: &str) -> Result<()> {
        ledger::require_owner(&self.store, name, &caller)?;
        let now = self.clock.now();
        let record = self.store.get_mut(name)?;
        if !record.lock.try_unlock(now) {
            return Err(RegistryError::EditLocked {
                name: name.to_string(),
            });
        }

        debug!(name, "edit lock released");
        Ok(())
    }

    pub fn address_for_chain(&self, name: &str, chain: ChainId) -> Result<String> {
        let record = self.store.get(name)?;
        address_book::address_for(record, chain).map(str::to_string)
    }

    pub fn all_addresses(&self, name: &str) -> Result<Vec<String>> {
        Ok(address_book::all_addresses(self.store.get(name)?))
    }

    pub fn owner_of(&self, token_id: TokenId) -> Result<AccountId> {
        ledger::owner_of(&self.store, token_id)
    }

    pub fn name_to_token_id(&self, name: &str) -> Result<TokenId> {
        ledger::token_id_of(&self.store, name)
    }

    pub fn lock_state(&self, name: &str) -> Result<LockState> {
        Ok(self.store.get(name)?.lock.state())
    }

    pub fn registered_at(&self, name: &str) -> Result<i64> {
        Ok(self.store.get(name)?.registered_at)
    }

    /// Dispatch one wire-level call on behalf of `caller`.
    pub fn handle(&mut self, caller: AccountId, call: RegistryCall) -> Result<CallOutput> {
        match call {
            RegistryCall::Register { name, chains, addrs } => {
                let bindings = validation::zip_bindings(chains, addrs)?;
                self.register(caller, &name, &bindings)
                    .map(CallOutput::TokenId)
            }
            RegistryCall::UpdateAddresses { name, chains, addrs } => {
                let bindings = validation::zip_bindings(chains, addrs)?;
                self.update_addresses(caller, &name, &bindings)
                    .map(|_| CallOutput::Unit)
            }
            RegistryCall::UnlockUpdate { name } => {
                self.unlock_update(caller, &name).map(|_| CallOutput::Unit)
            }
            RegistryCall::GetAddressForChain { name, chain } => self
                .address_for_chain(&name, chain)
                .map(CallOutput::Address),
            RegistryCall::GetAllAddresses { name } => {
                self.all_addresses(&name).map(CallOutput::Addresses)
            }
            RegistryCall::OwnerOf { token_id } => self.owner_of(token_id).map(CallOutput::Owner),
            RegistryCall::NameToTokenId { name } => {
                self.name_to_token_id(&name).map(CallOutput::TokenId)
            }
        }
    }
}

/// Clone-able, thread-safe registry handle. Mutations take the write lock
/// and reads the read lock, giving the serialized-writes / concurrent-reads
/// discipline a standalone deployment needs.
pub struct SharedRegistry<C: Clock = SystemClock> {
    inner: Arc<RwLock<NameRegistry<C>>>,
}

impl<C: Clock> Clone for SharedRegistry<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> SharedRegistry<C> {
    pub fn new(registry: NameRegistry<C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    pub fn register(
        &self,
        caller: AccountId,
        name: &str,
        bindings: &[(ChainId, String)],
    ) -> Result<TokenId> {
        self.inner.write().register(caller, name, bindings)
    }

    pub fn update_addresses(
        &self,
        caller: AccountId,
        name: &str,
        bindings: &[(ChainId, String)],
    ) -> Result<()> {
        self.inner.write().update_addresses(caller, name, bindings)
    }

    pub fn unlock_update(&self, caller: AccountId, name: &str) -> Result<()> {
        self.inner.write().unlock_update(caller, name)
    }

    pub fn handle(&self, caller: AccountId, call: RegistryCall) -> Result<CallOutput> {
        self.inner.write().handle(caller, call)
    }

    pub fn address_for_chain(&self, name: &str, chain: ChainId) -> Result<String> {
        self.inner.read().address_for_chain(name, chain)
    }

    pub fn all_addresses(&self, name: &str) -> Result<Vec<String>> {
        self.inner.read().all_addresses(name)
    }

    pub fn owner_of(&self, token_id: TokenId) -> Result<AccountId> {
        self.inner.read().owner_of(token_id)
    }

    pub fn name_to_token_id(&self, name: &str) -> Result<TokenId> {
        self.inner.read().name_to_token_id(name)
    }

    pub fn lock_state(&self, name: &str) -> Result<LockState> {
        self.inner.read().lock_state(name)
    }

    pub fn snapshot(&self) -> Result<Vec<u8>> {
        self.inner.read().snapshot()
    }
}
