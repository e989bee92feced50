use serde::{Deserialize, Serialize};

/// Static definition of an element extractor.
#[derive(Debug, Clone, Copy)]
pub struct UpgradeDef {
    pub id: &'static str,
    pub name: &'static str,
    /// Cost of level 1 before cost reductions.
    pub base_cost: f64,
    /// Exponential growth factor per level.
    pub cost_growth: f64,
    /// Coins per second produced by a single level.
    pub base_income: f64,
    /// Lifetime coins required before the extractor can be bought.
    pub unlock_at: f64,
}

/// Per-profile ownership record for one extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeState {
    pub id: String,
    pub level: u32,
}

impl UpgradeState {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            level: 0,
        }
    }
}
