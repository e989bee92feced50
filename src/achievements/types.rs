//! Achievement system types and data structures.

use crate::core::game_state::GameState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Achievement categories for organization in a browser view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementCategory {
    Tapping,
    Wealth,
    Industry,
    Prestige,
    Collection,
}

impl AchievementCategory {
    /// All categories in display order.
    pub const ALL: [AchievementCategory; 5] = [
        AchievementCategory::Tapping,
        AchievementCategory::Wealth,
        AchievementCategory::Industry,
        AchievementCategory::Prestige,
        AchievementCategory::Collection,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Tapping => "Tapping",
            AchievementCategory::Wealth => "Wealth",
            AchievementCategory::Industry => "Industry",
            AchievementCategory::Prestige => "Prestige",
            AchievementCategory::Collection => "Collection",
        }
    }
}

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    // Tapping - raw tap counts
    TapsI,   // 100 taps
    TapsII,  // 1,000
    TapsIII, // 10,000
    TapsIV,  // 100,000
    TapsV,   // 1,000,000
    // Tapping - lucky strikes
    LuckyStrikeI,  // 10
    LuckyStrikeII, // 100

    // Wealth - lifetime coins
    WealthI,   // 1K
    WealthII,  // 1M
    WealthIII, // 1B
    WealthIV,  // 1T
    WealthV,   // 1Q

    // Industry - extractor levels and managers
    IndustryI,   // 10 levels
    IndustryII,  // 100
    IndustryIII, // 500
    IndustryIV,  // 1,000
    ForemanI,    // 1 manager
    ForemanII,   // 6
    ForemanIII,  // 12

    // Prestige
    PrestigeI,   // 1 prestige
    PrestigeII,  // 5
    PrestigeIII, // 10
    PrestigeIV,  // 25
    EssenceHoarder, // 100 lifetime essence

    // Collection
    CollectorI,   // 3 artifacts
    CollectorII,  // 6
    CollectorIII, // 10
    ScholarI,     // 3 techs
    ScholarII,    // 8
    ScholarIII,   // 12
    PackRat,      // 10 items found
}

/// What a threshold is measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Requirement {
    Taps(u64),
    LuckyTaps(u64),
    LifetimeCoins(f64),
    UpgradeLevels(u32),
    Managers(u32),
    Prestiges(u32),
    TotalEssence(u64),
    Artifacts(u32),
    Techs(u32),
    ItemsFound(u64),
}

/// Record of one unlock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockInfo {
    pub unlocked_at: i64,
    pub profile: Option<String>,
}

/// Global achievement state, persisted independently of any one profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Achievements {
    pub unlocked: HashMap<AchievementId, UnlockInfo>,

    /// Unlocks since the last drain (transient, not saved)
    #[serde(skip)]
    newly_unlocked: Vec<AchievementId>,
}

impl Achievements {
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains_key(&id)
    }

    /// Unlock an achievement once; repeat calls are no-ops.
    pub fn unlock(&mut self, id: AchievementId, profile: Option<&str>) {
        if self.unlocked.contains_key(&id) {
            return;
        }
        self.unlocked.insert(
            id,
            UnlockInfo {
                unlocked_at: chrono::Utc::now().timestamp(),
                profile: profile.map(|p| p.to_string()),
            },
        );
        self.newly_unlocked.push(id);
    }

    /// Check every locked achievement against the current profile.
    pub fn evaluate(&mut self, state: &GameState) {
        for def in super::data::ACHIEVEMENTS.iter() {
            if self.is_unlocked(def.id) {
                continue;
            }
            if requirement_met(def.requirement, state) {
                self.unlock(def.id, Some(&state.profile_id));
            }
        }
    }

    /// Drain the unlocks recorded since the last call.
    pub fn take_newly_unlocked(&mut self) -> Vec<AchievementId> {
        std::mem::take(&mut self.newly_unlocked)
    }
}

fn requirement_met(req: Requirement, state: &GameState) -> bool {
    match req {
        Requirement::Taps(n) => state.total_taps >= n,
        Requirement::LuckyTaps(n) => state.lucky_taps >= n,
        Requirement::LifetimeCoins(c) => state.total_coins_earned >= c,
        Requirement::UpgradeLevels(n) => state.total_upgrade_levels() >= n,
        Requirement::Managers(n) => state.hired_managers.len() as u32 >= n,
        Requirement::Prestiges(n) => state.prestige_count >= n,
        Requirement::TotalEssence(n) => state.total_essence_earned >= n,
        Requirement::Artifacts(n) => state.owned_artifacts.len() as u32 >= n,
        Requirement::Techs(n) => state.unlocked_techs.len() as u32 >= n,
        Requirement::ItemsFound(n) => state.items_found >= n,
    }
}
