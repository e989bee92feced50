//! Static extractor table. Ordered by unlock threshold.

use super::types::UpgradeDef;

pub const UPGRADES: [UpgradeDef; 12] = [
    UpgradeDef {
        id: "hydrogen",
        name: "Hydrogen Siphon",
        base_cost: 10.0,
        cost_growth: 1.07,
        base_income: 0.5,
        unlock_at: 0.0,
    },
    UpgradeDef {
        id: "carbon",
        name: "Carbon Scraper",
        base_cost: 120.0,
        cost_growth: 1.08,
        base_income: 2.0,
        unlock_at: 60.0,
    },
    UpgradeDef {
        id: "iron",
        name: "Iron Borer",
        base_cost: 1_400.0,
        cost_growth: 1.09,
        base_income: 9.0,
        unlock_at: 700.0,
    },
    UpgradeDef {
        id: "silicon",
        name: "Silicon Refinery",
        base_cost: 16_000.0,
        cost_growth: 1.10,
        base_income: 42.0,
        unlock_at: 8_000.0,
    },
    UpgradeDef {
        id: "titanium",
        name: "Titanium Rig",
        base_cost: 190_000.0,
        cost_growth: 1.11,
        base_income: 190.0,
        unlock_at: 95_000.0,
    },
    UpgradeDef {
        id: "cobalt",
        name: "Cobalt Array",
        base_cost: 2_300_000.0,
        cost_growth: 1.12,
        base_income: 880.0,
        unlock_at: 1_100_000.0,
    },
    UpgradeDef {
        id: "silver",
        name: "Silver Extractor",
        base_cost: 28_000_000.0,
        cost_growth: 1.13,
        base_income: 4_100.0,
        unlock_at: 14_000_000.0,
    },
    UpgradeDef {
        id: "gold",
        name: "Gold Harvester",
        base_cost: 340_000_000.0,
        cost_growth: 1.14,
        base_income: 19_000.0,
        unlock_at: 170_000_000.0,
    },
    UpgradeDef {
        id: "platinum",
        name: "Platinum Foundry",
        base_cost: 4.2e9,
        cost_growth: 1.15,
        base_income: 88_000.0,
        unlock_at: 2.1e9,
    },
    UpgradeDef {
        id: "iridium",
        name: "Iridium Driller",
        base_cost: 5.2e10,
        cost_growth: 1.15,
        base_income: 410_000.0,
        unlock_at: 2.6e10,
    },
    UpgradeDef {
        id: "palladium",
        name: "Palladium Forge",
        base_cost: 6.4e11,
        cost_growth: 1.16,
        base_income: 1_900_000.0,
        unlock_at: 3.2e11,
    },
    UpgradeDef {
        id: "stellarite",
        name: "Stellarite Collider",
        base_cost: 8.0e12,
        cost_growth: 1.17,
        base_income: 8_800_000.0,
        unlock_at: 4.0e12,
    },
];

/// Look up an extractor definition by id.
pub fn get_upgrade(id: &str) -> Option<&'static UpgradeDef> {
    UPGRADES.iter().find(|u| u.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique() {
        for (i, a) in UPGRADES.iter().enumerate() {
            for b in &UPGRADES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_table_ordering_and_sanity() {
        let mut prev_unlock = -1.0;
        for def in &UPGRADES {
            assert!(def.base_cost > 0.0, "{} base cost", def.id);
            assert!(def.cost_growth > 1.0, "{} growth", def.id);
            assert!(def.base_income > 0.0, "{} income", def.id);
            assert!(def.unlock_at > prev_unlock, "{} unlock order", def.id);
            prev_unlock = def.unlock_at;
        }
    }

    #[test]
    fn test_lookup() {
        assert!(get_upgrade("hydrogen").is_some());
        assert!(get_upgrade("unobtainium").is_none());
    }
}
