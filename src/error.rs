use thiserror::Error;

use crate::state::{ChainId, TokenId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("name already registered: {name}")]
    AlreadyRegistered { name: String },

    #[error("unknown name: {name}")]
    UnknownName { name: String },

    #[error("unknown token id: {token_id}")]
    UnknownToken { token_id: TokenId },

    #[error("caller is not the owner of name: {name}")]
    NotOwner { name: String },

    #[error("length mismatch: {chains} chain ids, {addrs} addresses")]
    LengthMismatch { chains: usize, addrs: usize },

    #[error("edit lock engaged for name: {name}")]
    EditLocked { name: String },

    #[error("no address bound for chain {chain} under name: {name}")]
    UnboundChain { name: String, chain: ChainId },

    #[error("invalid name: {name:?}")]
    InvalidName { name: String },

    #[error("malformed call payload")]
    MalformedCall,

    #[error("serialization failure: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
