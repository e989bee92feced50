//! Static manager roster, one per extractor.

use super::types::ManagerDef;

pub const MANAGERS: [ManagerDef; 12] = [
    ManagerDef {
        id: "hydrogen_foreman",
        name: "Vesna the Siphon Foreman",
        element: "hydrogen",
        hire_cost: 1_000.0,
        income_mult: 2.0,
    },
    ManagerDef {
        id: "carbon_foreman",
        name: "Brick Okafor",
        element: "carbon",
        hire_cost: 12_000.0,
        income_mult: 2.0,
    },
    ManagerDef {
        id: "iron_foreman",
        name: "Old Harrow",
        element: "iron",
        hire_cost: 140_000.0,
        income_mult: 2.0,
    },
    ManagerDef {
        id: "silicon_foreman",
        name: "Doctor Lattice",
        element: "silicon",
        hire_cost: 1_600_000.0,
        income_mult: 2.0,
    },
    ManagerDef {
        id: "titanium_foreman",
        name: "Rig-Captain Sato",
        element: "titanium",
        hire_cost: 19_000_000.0,
        income_mult: 2.0,
    },
    ManagerDef {
        id: "cobalt_foreman",
        name: "The Blue Twins",
        element: "cobalt",
        hire_cost: 230_000_000.0,
        income_mult: 2.5,
    },
    ManagerDef {
        id: "silver_foreman",
        name: "Mirror-Eye Moira",
        element: "silver",
        hire_cost: 2.8e9,
        income_mult: 2.5,
    },
    ManagerDef {
        id: "gold_foreman",
        name: "Gilded Tam",
        element: "gold",
        hire_cost: 3.4e10,
        income_mult: 2.5,
    },
    ManagerDef {
        id: "platinum_foreman",
        name: "Foundry-Mother Oyelaran",
        element: "platinum",
        hire_cost: 4.2e11,
        income_mult: 3.0,
    },
    ManagerDef {
        id: "iridium_foreman",
        name: "Hex the Driller",
        element: "iridium",
        hire_cost: 5.2e12,
        income_mult: 3.0,
    },
    ManagerDef {
        id: "palladium_foreman",
        name: "Smelter-Sage Irune",
        element: "palladium",
        hire_cost: 6.4e13,
        income_mult: 3.0,
    },
    ManagerDef {
        id: "stellarite_foreman",
        name: "The Collider Ghost",
        element: "stellarite",
        hire_cost: 8.0e14,
        income_mult: 3.0,
    },
];

/// Look up a manager definition by id.
pub fn get_manager(id: &str) -> Option<&'static ManagerDef> {
    MANAGERS.iter().find(|m| m.id == id)
}
