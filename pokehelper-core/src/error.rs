//! Error taxonomy shared by the helper's state transitions and storage layer.

use thiserror::Error;

/// User-input problems. Reported to the user immediately; the operation that
/// raised one leaves all state untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please select a Pokémon first")]
    MissingPokemon,
    #[error("{stat} IV must be between 0 and {max} (got {value})")]
    IvOutOfRange {
        stat: &'static str,
        value: u8,
        max: u8,
    },
    #[error("Please enter an item name")]
    MissingItemName,
    #[error("Quantity must be at least 1")]
    ZeroQuantity,
    #[error("Unknown berry '{0}'")]
    UnknownBerry(String),
    #[error("Current HP must be between 1 and 100% (got {0}%)")]
    HpOutOfRange(u8),
    #[error("Please select an egg move")]
    MissingEggMove,
    #[error("Gender ratio must sum to 100 (got {male} / {female})")]
    GenderRatio { male: f64, female: f64 },
}

/// Failures reading or writing the persisted blob. These never reach the user:
/// loads fall back to defaults and saves are dropped after logging.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage quota exceeded ({needed} bytes needed, {quota} allowed)")]
    QuotaExceeded { needed: usize, quota: usize },
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A label that does not name any variant of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
