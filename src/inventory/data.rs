//! Static supply item table.

use super::types::{ItemDef, ItemEffect};
use crate::boosts::types::BoostEffect;

pub const ITEMS: [ItemDef; 8] = [
    ItemDef {
        id: "drill_bit",
        name: "Tempered Drill Bit",
        description: "Triples tap power for two minutes.",
        gem_price: Some(10),
        effect: Some(ItemEffect {
            effect: BoostEffect::TapPower,
            multiplier: 3.0,
            duration_seconds: 120.0,
        }),
    },
    ItemDef {
        id: "fuel_cell",
        name: "Surplus Fuel Cell",
        description: "Doubles passive income for five minutes.",
        gem_price: Some(15),
        effect: Some(ItemEffect {
            effect: BoostEffect::IncomeRate,
            multiplier: 2.0,
            duration_seconds: 300.0,
        }),
    },
    ItemDef {
        id: "trade_manifest",
        name: "Trade Manifest",
        description: "Knocks 20% off upgrade prices for ten minutes.",
        gem_price: Some(20),
        effect: Some(ItemEffect {
            effect: BoostEffect::CostReduction,
            multiplier: 0.8,
            duration_seconds: 600.0,
        }),
    },
    ItemDef {
        id: "resonance_crystal",
        name: "Resonance Crystal",
        description: "Amplifies essence gain by 50% for fifteen minutes.",
        gem_price: Some(40),
        effect: Some(ItemEffect {
            effect: BoostEffect::EssenceGain,
            multiplier: 1.5,
            duration_seconds: 900.0,
        }),
    },
    ItemDef {
        id: "overclock_chip",
        name: "Overclock Chip",
        description: "Quadruples passive income for one minute.",
        gem_price: Some(25),
        effect: Some(ItemEffect {
            effect: BoostEffect::IncomeRate,
            multiplier: 4.0,
            duration_seconds: 60.0,
        }),
    },
    ItemDef {
        id: "plasma_lance",
        name: "Plasma Lance",
        description: "Quintuples tap power for thirty seconds.",
        gem_price: None,
        effect: Some(ItemEffect {
            effect: BoostEffect::TapPower,
            multiplier: 5.0,
            duration_seconds: 30.0,
        }),
    },
    ItemDef {
        id: "meteor_shard",
        name: "Meteor Shard",
        description: "A glittering keepsake from the deep belt.",
        gem_price: None,
        effect: None,
    },
    ItemDef {
        id: "alien_coin",
        name: "Alien Coin",
        description: "Currency of a civilisation nobody has met.",
        gem_price: None,
        effect: None,
    },
];

/// Look up an item definition by id.
pub fn get_item(id: &str) -> Option<&'static ItemDef> {
    ITEMS.iter().find(|i| i.id == id)
}

/// The drop pool for taps and idle salvage rolls. Every item can drop,
/// trophies included.
pub fn droppable_items() -> Vec<&'static ItemDef> {
    ITEMS.iter().collect()
}
