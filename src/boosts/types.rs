use serde::{Deserialize, Serialize};

/// What a boost multiplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoostEffect {
    /// Multiplies tap value.
    TapPower,
    /// Multiplies passive income.
    IncomeRate,
    /// Multiplies upgrade costs (values below 1.0; floored globally at 50%).
    CostReduction,
    /// Multiplies the essence reward at prestige time.
    EssenceGain,
}

impl BoostEffect {
    pub fn name(&self) -> &'static str {
        match self {
            BoostEffect::TapPower => "tap power",
            BoostEffect::IncomeRate => "income",
            BoostEffect::CostReduction => "cost reduction",
            BoostEffect::EssenceGain => "essence gain",
        }
    }
}

/// Where a boost came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoostSource {
    Ad,
    Purchase,
    Item,
}

/// A currently running multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveBoost {
    pub effect: BoostEffect,
    pub multiplier: f64,
    pub source: BoostSource,
    /// Unix timestamp of activation, kept for the save blob and display.
    pub activated_at: i64,
    /// Seconds left; `None` means permanent.
    pub remaining_seconds: Option<f64>,
}

impl ActiveBoost {
    pub fn is_permanent(&self) -> bool {
        self.remaining_seconds.is_none()
    }
}
