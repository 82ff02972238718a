use crate::error::{RegistryError, Result};
use crate::state::ChainId;

pub const MAX_NAME_LENGTH: usize = 32;

/// Names are case-sensitive opaque strings; only emptiness and length are
/// checked.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.len() > MAX_NAME_LENGTH {
        return Err(RegistryError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Pair up the two-array wire form, rejecting ragged input before any state
/// is touched. The typed registry API only ever sees the paired form.
pub fn zip_bindings(chains: Vec<ChainId>, addrs: Vec<String>) -> Result<Vec<(ChainId, String)>> {
    if chains.len() != addrs.len() {
        return Err(RegistryError::LengthMismatch {
            chains: chains.len(),
            addrs: addrs.len(),
        });
    }
    Ok(chains.into_iter().zip(addrs).collect())
}
