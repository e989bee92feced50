//! Validation errors for player operations.
//!
//! Every state-mutating operation (buying, hiring, unlocking, prestiging)
//! validates its inputs and returns one of these instead of silently
//! ignoring a bad request. Persistence uses `io::Error` separately.

use thiserror::Error;

/// Errors produced by game operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    /// Id not present in the corresponding static data table.
    #[error("unknown {kind} id: {id}")]
    UnknownId { kind: &'static str, id: String },

    #[error("not enough coins: need {needed:.0}, have {available:.0}")]
    InsufficientCoins { needed: f64, available: f64 },

    #[error("not enough gems: need {needed}, have {available}")]
    InsufficientGems { needed: u64, available: u64 },

    #[error("not enough essence: need {needed}, have {available}")]
    InsufficientEssence { needed: u64, available: u64 },

    #[error("not enough skill points: need {needed}, have {available}")]
    InsufficientSkillPoints { needed: u32, available: u32 },

    /// Extractor exists but its unlock threshold has not been reached.
    #[error("extractor {0} is still locked")]
    UpgradeLocked(String),

    /// Managers can only run an extractor that has at least one level.
    #[error("manager {0} needs its extractor to be built first")]
    ManagerWithoutExtractor(String),

    #[error("manager {0} is already hired")]
    AlreadyHired(String),

    #[error("artifact {0} is already owned")]
    AlreadyOwned(String),

    #[error("tech {0} is already unlocked")]
    AlreadyUnlocked(String),

    #[error("tech {id} requires {missing} first")]
    PrerequisiteMissing { id: String, missing: String },

    #[error("no {0} left in inventory")]
    EmptyStack(String),

    #[error("item {0} has no usable effect")]
    ItemNotUsable(String),

    /// A timed boost of the same effect is already running (ad-grant gate).
    #[error("a {0} boost is already active")]
    BoostAlreadyActive(&'static str),

    #[error("quantity must be at least 1")]
    ZeroQuantity,

    #[error("prestige requires {needed:.0} lifetime coins, have {available:.0}")]
    PrestigeNotReady { needed: f64, available: f64 },
}
