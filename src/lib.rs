//! Multi-chain name registry.
//!
//! Binds a unique human-readable name to an owner identity (represented by a
//! token id) and to one resolution address per chain namespace. After
//! registration the bindings are frozen behind a 30-day edit lock: the owner
//! must wait out the cooldown, unlock, and edit, at which point the lock
//! re-arms from the edit time.
//!
//! The crate assumes a trusted dispatch layer that has already authenticated
//! the caller and serializes invocations; [`process_call`] is the byte-level
//! entry for such a layer, while [`NameRegistry`] exposes the typed API and
//! [`SharedRegistry`] adds the locking a standalone deployment needs.

pub mod address_book;
pub mod clock;
pub mod error;
pub mod instruction;
pub mod ledger;
pub mod lock;
pub mod registry;
pub mod state;
pub mod store;
pub mod validation;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{RegistryError, Result};
pub use instruction::{CallOutput, RegistryCall};
pub use lock::{LockState, LOCK_PERIOD};
pub use registry::{NameRegistry, SharedRegistry};
pub use state::{AccountId, ChainAddress, ChainId, NameRecord, TokenId};

/// Decode and execute one borsh-encoded call on behalf of `caller`,
/// returning the borsh-encoded output.
pub fn process_call<C: Clock>(
    registry: &mut NameRegistry<C>,
    caller: AccountId,
    input: &[u8],
) -> Result<Vec<u8>> {
    let call = RegistryCall::unpack(input)?;
    let output = registry.handle(caller, call)?;
    output.pack()
}
