//! Achievement definitions.

use super::types::{AchievementCategory, AchievementId, Requirement};

/// Static definition of one achievement.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub requirement: Requirement,
    pub reward_gems: u64,
}

use super::types::AchievementCategory as Cat;
use super::types::AchievementId as Id;
use super::types::Requirement as Req;

pub const ACHIEVEMENTS: [AchievementDef; 31] = [
    // ── Tapping ─────────────────────────────────────────────────
    AchievementDef { id: Id::TapsI, name: "Knuckle Cracker", description: "Tap 100 times.", category: Cat::Tapping, requirement: Req::Taps(100), reward_gems: 5 },
    AchievementDef { id: Id::TapsII, name: "Callused", description: "Tap 1,000 times.", category: Cat::Tapping, requirement: Req::Taps(1_000), reward_gems: 10 },
    AchievementDef { id: Id::TapsIII, name: "Jackhammer", description: "Tap 10,000 times.", category: Cat::Tapping, requirement: Req::Taps(10_000), reward_gems: 20 },
    AchievementDef { id: Id::TapsIV, name: "Seismic Event", description: "Tap 100,000 times.", category: Cat::Tapping, requirement: Req::Taps(100_000), reward_gems: 40 },
    AchievementDef { id: Id::TapsV, name: "Tectonic Force", description: "Tap 1,000,000 times.", category: Cat::Tapping, requirement: Req::Taps(1_000_000), reward_gems: 100 },
    AchievementDef { id: Id::LuckyStrikeI, name: "Beginner's Luck", description: "Land 10 lucky taps.", category: Cat::Tapping, requirement: Req::LuckyTaps(10), reward_gems: 10 },
    AchievementDef { id: Id::LuckyStrikeII, name: "Rabbit's Foot", description: "Land 100 lucky taps.", category: Cat::Tapping, requirement: Req::LuckyTaps(100), reward_gems: 30 },
    // ── Wealth ──────────────────────────────────────────────────
    AchievementDef { id: Id::WealthI, name: "Pocket Change", description: "Earn 1,000 lifetime coins.", category: Cat::Wealth, requirement: Req::LifetimeCoins(1e3), reward_gems: 5 },
    AchievementDef { id: Id::WealthII, name: "Claim Staker", description: "Earn 1 million lifetime coins.", category: Cat::Wealth, requirement: Req::LifetimeCoins(1e6), reward_gems: 15 },
    AchievementDef { id: Id::WealthIII, name: "Belt Baron", description: "Earn 1 billion lifetime coins.", category: Cat::Wealth, requirement: Req::LifetimeCoins(1e9), reward_gems: 30 },
    AchievementDef { id: Id::WealthIV, name: "System Magnate", description: "Earn 1 trillion lifetime coins.", category: Cat::Wealth, requirement: Req::LifetimeCoins(1e12), reward_gems: 60 },
    AchievementDef { id: Id::WealthV, name: "Galactic Gross Product", description: "Earn 1 quadrillion lifetime coins.", category: Cat::Wealth, requirement: Req::LifetimeCoins(1e15), reward_gems: 120 },
    // ── Industry ────────────────────────────────────────────────
    AchievementDef { id: Id::IndustryI, name: "First Rig", description: "Own 10 extractor levels.", category: Cat::Industry, requirement: Req::UpgradeLevels(10), reward_gems: 5 },
    AchievementDef { id: Id::IndustryII, name: "Pit Boss", description: "Own 100 extractor levels.", category: Cat::Industry, requirement: Req::UpgradeLevels(100), reward_gems: 15 },
    AchievementDef { id: Id::IndustryIII, name: "Strip Miner", description: "Own 500 extractor levels.", category: Cat::Industry, requirement: Req::UpgradeLevels(500), reward_gems: 40 },
    AchievementDef { id: Id::IndustryIV, name: "Hollowed World", description: "Own 1,000 extractor levels.", category: Cat::Industry, requirement: Req::UpgradeLevels(1_000), reward_gems: 80 },
    AchievementDef { id: Id::ForemanI, name: "Delegator", description: "Hire your first manager.", category: Cat::Industry, requirement: Req::Managers(1), reward_gems: 10 },
    AchievementDef { id: Id::ForemanII, name: "Middle Management", description: "Hire 6 managers.", category: Cat::Industry, requirement: Req::Managers(6), reward_gems: 30 },
    AchievementDef { id: Id::ForemanIII, name: "Full Roster", description: "Hire all 12 managers.", category: Cat::Industry, requirement: Req::Managers(12), reward_gems: 75 },
    // ── Prestige ────────────────────────────────────────────────
    AchievementDef { id: Id::PrestigeI, name: "Scorched Claim", description: "Prestige for the first time.", category: Cat::Prestige, requirement: Req::Prestiges(1), reward_gems: 20 },
    AchievementDef { id: Id::PrestigeII, name: "Serial Restarter", description: "Prestige 5 times.", category: Cat::Prestige, requirement: Req::Prestiges(5), reward_gems: 40 },
    AchievementDef { id: Id::PrestigeIII, name: "Eternal Return", description: "Prestige 10 times.", category: Cat::Prestige, requirement: Req::Prestiges(10), reward_gems: 80 },
    AchievementDef { id: Id::PrestigeIV, name: "Ouroboros", description: "Prestige 25 times.", category: Cat::Prestige, requirement: Req::Prestiges(25), reward_gems: 150 },
    AchievementDef { id: Id::EssenceHoarder, name: "Essence Hoarder", description: "Earn 100 lifetime essence.", category: Cat::Prestige, requirement: Req::TotalEssence(100), reward_gems: 100 },
    // ── Collection ──────────────────────────────────────────────
    AchievementDef { id: Id::CollectorI, name: "Curio Shelf", description: "Own 3 artifacts.", category: Cat::Collection, requirement: Req::Artifacts(3), reward_gems: 15 },
    AchievementDef { id: Id::CollectorII, name: "Private Museum", description: "Own 6 artifacts.", category: Cat::Collection, requirement: Req::Artifacts(6), reward_gems: 40 },
    AchievementDef { id: Id::CollectorIII, name: "Vault of Wonders", description: "Own all 10 artifacts.", category: Cat::Collection, requirement: Req::Artifacts(10), reward_gems: 100 },
    AchievementDef { id: Id::ScholarI, name: "Apprentice", description: "Unlock 3 tech nodes.", category: Cat::Collection, requirement: Req::Techs(3), reward_gems: 15 },
    AchievementDef { id: Id::ScholarII, name: "Engineer", description: "Unlock 8 tech nodes.", category: Cat::Collection, requirement: Req::Techs(8), reward_gems: 40 },
    AchievementDef { id: Id::ScholarIII, name: "Polymath", description: "Unlock the whole tree.", category: Cat::Collection, requirement: Req::Techs(12), reward_gems: 100 },
    AchievementDef { id: Id::PackRat, name: "Pack Rat", description: "Find 10 supply caches.", category: Cat::Collection, requirement: Req::ItemsFound(10), reward_gems: 20 },
];

/// Look up the definition for an achievement id.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ACHIEVEMENTS.iter().find(|d| d.id == id)
}

/// All achievements in a category, in definition order.
pub fn get_achievements_by_category(category: AchievementCategory) -> Vec<&'static AchievementDef> {
    ACHIEVEMENTS.iter().filter(|d| d.category == category).collect()
}
