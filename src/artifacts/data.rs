//! Static artifact catalogue.

use super::types::{ArtifactCost, ArtifactDef, Perk};

pub const ARTIFACTS: [ArtifactDef; 10] = [
    ArtifactDef {
        id: "dusty_pickaxe",
        name: "Dusty Pickaxe",
        description: "The first tool ever swung out here.",
        cost: ArtifactCost::Essence(1),
        perk: Perk::TapBoost(0.25),
    },
    ArtifactDef {
        id: "miners_almanac",
        name: "Miner's Almanac",
        description: "Margin notes from a hundred dead claims.",
        cost: ArtifactCost::Essence(2),
        perk: Perk::IncomeBoost(0.20),
    },
    ArtifactDef {
        id: "quartz_ledger",
        name: "Quartz Ledger",
        description: "Suppliers cannot argue with crystal bookkeeping.",
        cost: ArtifactCost::Essence(3),
        perk: Perk::CostReduction(0.10),
    },
    ArtifactDef {
        id: "void_compass",
        name: "Void Compass",
        description: "Points at whatever is worth the trip.",
        cost: ArtifactCost::Essence(5),
        perk: Perk::IncomeBoost(0.35),
    },
    ArtifactDef {
        id: "ember_of_core",
        name: "Ember of the Core",
        description: "Still warm after a billion years.",
        cost: ArtifactCost::Essence(8),
        perk: Perk::EssenceGain(0.25),
    },
    ArtifactDef {
        id: "sleepers_coil",
        name: "Sleeper's Coil",
        description: "The rigs hum along while you are gone.",
        cost: ArtifactCost::Essence(12),
        perk: Perk::OfflineRate(0.50),
    },
    ArtifactDef {
        id: "titan_gauntlet",
        name: "Titan Gauntlet",
        description: "Taps land like orbital strikes.",
        cost: ArtifactCost::Essence(20),
        perk: Perk::TapBoost(0.75),
    },
    ArtifactDef {
        id: "broker_sigil",
        name: "Broker's Sigil",
        description: "Every invoice quietly shrinks.",
        cost: ArtifactCost::Gems(150),
        perk: Perk::CostReduction(0.15),
    },
    ArtifactDef {
        id: "comet_in_a_jar",
        name: "Comet in a Jar",
        description: "Illegal in four systems, profitable in all of them.",
        cost: ArtifactCost::Gems(300),
        perk: Perk::IncomeBoost(0.50),
    },
    ArtifactDef {
        id: "heart_of_the_belt",
        name: "Heart of the Belt",
        description: "The asteroid likes you now.",
        cost: ArtifactCost::Essence(40),
        perk: Perk::EssenceGain(0.50),
    },
];

/// Look up an artifact definition by id.
pub fn get_artifact(id: &str) -> Option<&'static ArtifactDef> {
    ARTIFACTS.iter().find(|a| a.id == id)
}
