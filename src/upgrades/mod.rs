//! Element extractors: the coin-producing upgrades of the mine.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{get_upgrade, UPGRADES};
pub use logic::{buy_upgrade, max_affordable, next_cost, PurchaseOutcome};
pub use types::{UpgradeDef, UpgradeState};
