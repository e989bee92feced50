use crate::boosts::types::BoostEffect;
use serde::{Deserialize, Serialize};

/// Boost applied when an item is consumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemEffect {
    pub effect: BoostEffect,
    pub multiplier: f64,
    pub duration_seconds: f64,
}

/// Static definition of a supply item.
#[derive(Debug, Clone, Copy)]
pub struct ItemDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Gem price in the supply depot; `None` = not sold, only found.
    pub gem_price: Option<u64>,
    /// `None` for trophies with no active use.
    pub effect: Option<ItemEffect>,
}

/// A held stack of one item kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub id: String,
    pub quantity: u32,
}
