//! Static tech tree. Three branches: drilling (tap), automation (income),
//! logistics (costs/essence/offline).

use super::types::TechDef;
use crate::artifacts::types::Perk;

pub const TECH_TREE: [TechDef; 12] = [
    // Drilling branch
    TechDef {
        id: "reinforced_bits",
        name: "Reinforced Bits",
        description: "Taps bite 20% harder.",
        cost: 1,
        requires: &[],
        perk: Perk::TapBoost(0.20),
    },
    TechDef {
        id: "percussive_drilling",
        name: "Percussive Drilling",
        description: "Taps bite 40% harder still.",
        cost: 2,
        requires: &["reinforced_bits"],
        perk: Perk::TapBoost(0.40),
    },
    TechDef {
        id: "seismic_resonators",
        name: "Seismic Resonators",
        description: "The whole rock rings with every tap.",
        cost: 4,
        requires: &["percussive_drilling"],
        perk: Perk::TapBoost(0.80),
    },
    // Automation branch
    TechDef {
        id: "conveyor_lines",
        name: "Conveyor Lines",
        description: "Extractors feed themselves. +15% income.",
        cost: 1,
        requires: &[],
        perk: Perk::IncomeBoost(0.15),
    },
    TechDef {
        id: "smart_scheduling",
        name: "Smart Scheduling",
        description: "Rigs stop waiting on each other. +25% income.",
        cost: 2,
        requires: &["conveyor_lines"],
        perk: Perk::IncomeBoost(0.25),
    },
    TechDef {
        id: "swarm_robotics",
        name: "Swarm Robotics",
        description: "Ten thousand tiny hands. +50% income.",
        cost: 4,
        requires: &["smart_scheduling"],
        perk: Perk::IncomeBoost(0.50),
    },
    TechDef {
        id: "fusion_overdrive",
        name: "Fusion Overdrive",
        description: "Run everything past the red line. +100% income.",
        cost: 8,
        requires: &["swarm_robotics", "seismic_resonators"],
        perk: Perk::IncomeBoost(1.00),
    },
    // Logistics branch
    TechDef {
        id: "bulk_contracts",
        name: "Bulk Contracts",
        description: "Suppliers discount 8% for volume.",
        cost: 1,
        requires: &[],
        perk: Perk::CostReduction(0.08),
    },
    TechDef {
        id: "orbital_freight",
        name: "Orbital Freight",
        description: "Cheaper lift, cheaper rigs. Another 12% off.",
        cost: 3,
        requires: &["bulk_contracts"],
        perk: Perk::CostReduction(0.12),
    },
    TechDef {
        id: "essence_filters",
        name: "Essence Filters",
        description: "Less essence lost to the void. +20% essence gain.",
        cost: 3,
        requires: &["bulk_contracts"],
        perk: Perk::EssenceGain(0.20),
    },
    TechDef {
        id: "night_shift",
        name: "Night Shift Protocols",
        description: "The mine keeps better hours than you. +40% offline rate.",
        cost: 2,
        requires: &["conveyor_lines"],
        perk: Perk::OfflineRate(0.40),
    },
    TechDef {
        id: "deep_core_mapping",
        name: "Deep Core Mapping",
        description: "Charts of what the belt hides. +35% essence gain.",
        cost: 6,
        requires: &["essence_filters"],
        perk: Perk::EssenceGain(0.35),
    },
];

/// Look up a tech node definition by id.
pub fn get_tech(id: &str) -> Option<&'static TechDef> {
    TECH_TREE.iter().find(|t| t.id == id)
}
