//! Level-up reward table and claiming.

use crate::core::game_state::GameState;
use crate::inventory::logic::add_item;

/// Reward granted when the player first reaches a level.
#[derive(Debug, Clone, Copy)]
pub struct LevelRewardDef {
    pub level: u32,
    pub gems: u64,
    pub skill_points: u32,
    pub item: Option<&'static str>,
}

pub const LEVEL_REWARDS: [LevelRewardDef; 16] = [
    LevelRewardDef { level: 2, gems: 5, skill_points: 1, item: None },
    LevelRewardDef { level: 3, gems: 5, skill_points: 0, item: Some("drill_bit") },
    LevelRewardDef { level: 5, gems: 10, skill_points: 1, item: None },
    LevelRewardDef { level: 8, gems: 10, skill_points: 1, item: Some("fuel_cell") },
    LevelRewardDef { level: 12, gems: 15, skill_points: 1, item: None },
    LevelRewardDef { level: 16, gems: 15, skill_points: 2, item: Some("trade_manifest") },
    LevelRewardDef { level: 20, gems: 20, skill_points: 2, item: None },
    LevelRewardDef { level: 25, gems: 25, skill_points: 2, item: Some("overclock_chip") },
    LevelRewardDef { level: 30, gems: 30, skill_points: 3, item: None },
    LevelRewardDef { level: 40, gems: 40, skill_points: 3, item: Some("plasma_lance") },
    LevelRewardDef { level: 50, gems: 50, skill_points: 4, item: Some("resonance_crystal") },
    LevelRewardDef { level: 65, gems: 65, skill_points: 4, item: None },
    LevelRewardDef { level: 80, gems: 80, skill_points: 5, item: Some("meteor_shard") },
    LevelRewardDef { level: 100, gems: 100, skill_points: 6, item: None },
    LevelRewardDef { level: 125, gems: 150, skill_points: 8, item: Some("alien_coin") },
    LevelRewardDef { level: 150, gems: 200, skill_points: 10, item: None },
];

/// A reward that was just handed out.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimedLevelReward {
    pub level: u32,
    pub gems: u64,
    pub skill_points: u32,
    pub item: Option<&'static str>,
}

/// Claim every reward between the claim high-water mark and the current
/// player level, exactly once each.
pub fn claim_pending_level_rewards(state: &mut GameState) -> Vec<ClaimedLevelReward> {
    let mut claimed = Vec::new();
    for def in &LEVEL_REWARDS {
        if def.level > state.claimed_reward_level && def.level <= state.player_level {
            state.gems += def.gems;
            state.skill_points += def.skill_points;
            if let Some(item) = def.item {
                // Table-checked id; an error here would be a data bug.
                let _ = add_item(state, item, 1);
            }
            claimed.push(ClaimedLevelReward {
                level: def.level,
                gems: def.gems,
                skill_points: def.skill_points,
                item: def.item,
            });
        }
    }
    state.claimed_reward_level = state.claimed_reward_level.max(state.player_level);
    claimed
}
