use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Generator,
    Upgrade,
    Save,
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Generator => "generator",
            Self::Upgrade => "upgrade",
            Self::Save => "save",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EconomyError {
    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },

    #[error("insufficient inventory: tried to sell {requested}, own {owned}")]
    InsufficientInventory { requested: u64, owned: u64 },

    #[error("upgrade '{0}' already purchased")]
    AlreadyPurchased(String),

    #[error("unknown {kind} '{id}'")]
    UnknownId { kind: IdKind, id: String },

    #[error("quantity must be at least 1")]
    InvalidQuantity,

    #[error("serialization failure: {0}")]
    Serialization(String),
}

impl EconomyError {
    pub fn unknown(kind: IdKind, id: &str) -> Self {
        Self::UnknownId {
            kind,
            id: id.to_string(),
        }
    }

    pub fn serialization(err: &anyhow::Error) -> Self {
        Self::Serialization(format!("{err:#}"))
    }
}

pub type EconomyResult<T> = Result<T, EconomyError>;
