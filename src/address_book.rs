//! Per-name chain-to-address bindings.
//!
//! Enumeration order is the first-insertion order of chain ids; replacing an
//! already-bound chain updates the value in place without moving it. No
//! authorization happens here; the façade checks ownership before calling
//! any mutating operation.

use crate::error::{RegistryError, Result};
use crate::state::{ChainAddress, ChainId, NameRecord};

/// Insert or replace one binding per pair, in input order. Last write wins
/// per chain id, within a single call as well as across calls.
pub fn set_addresses(record: &mut NameRecord, bindings: &[(ChainId, String)]) {
    for (chain, address) in bindings {
        match record.addresses.iter_mut().find(|e| e.chain == *chain) {
            Some(entry) => entry.address = address.clone(),
            None => record.addresses.push(ChainAddress {
                chain: *chain,
                address: address.clone(),
            }),
        }
    }
}

pub fn address_for(record: &NameRecord, chain: ChainId) -> Result<&str> {
    record
        .addresses
        .iter()
        .find(|e| e.chain == chain)
        .map(|e| e.address.as_str())
        .ok_or_else(|| RegistryError::UnboundChain {
            name: record.name.clone(),
            chain,
        })
}

pub fn all_addresses(record: &NameRecord) -> Vec<String> {
    record.addresses.iter().map(|e| e.address.clone()).collect()
}
