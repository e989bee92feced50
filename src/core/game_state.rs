use crate::boosts::types::ActiveBoost;
use crate::inventory::types::ItemStack;
use crate::upgrades::data::UPGRADES;
use crate::upgrades::types::UpgradeState;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::constants::RECENT_EVENT_CAPACITY;

/// Main game state containing all player progress.
///
/// One flat record, mutated in place by operation functions and the tick.
/// Transient session fields are `#[serde(skip)]` and rebuilt on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub profile_id: String,

    // Currency balances
    pub coins: f64,
    pub gems: u64,
    pub essence: u64,
    pub skill_points: u32,

    // Lifetime counters
    pub total_coins_earned: f64,
    pub total_taps: u64,
    pub lucky_taps: u64,
    /// Supply caches found across the profile's lifetime.
    pub items_found: u64,
    pub prestige_count: u32,
    pub total_essence_earned: u64,
    /// Lifetime coins at the last prestige; essence is earned on the delta.
    pub coins_at_last_prestige: f64,
    pub play_time_seconds: u64,

    // Collections
    pub upgrades: Vec<UpgradeState>,
    pub hired_managers: Vec<String>,
    pub owned_artifacts: Vec<String>,
    pub unlocked_techs: Vec<String>,
    pub inventory: Vec<ItemStack>,
    pub active_boosts: Vec<ActiveBoost>,

    // Progression
    pub player_level: u32,
    /// Highest level whose reward has been claimed.
    pub claimed_reward_level: u32,

    pub last_save_time: i64,

    /// Taps this session (transient, not saved)
    #[serde(skip)]
    pub session_taps: u64,
    /// Recent notable events for display (transient, not saved)
    #[serde(skip)]
    pub recent_events: VecDeque<String>,
}

impl GameState {
    /// Creates a fresh profile with every extractor at level 0.
    pub fn new(current_time: i64) -> Self {
        Self {
            profile_id: uuid::Uuid::new_v4().to_string(),
            coins: 0.0,
            gems: 0,
            essence: 0,
            skill_points: 0,
            total_coins_earned: 0.0,
            total_taps: 0,
            lucky_taps: 0,
            items_found: 0,
            prestige_count: 0,
            total_essence_earned: 0,
            coins_at_last_prestige: 0.0,
            play_time_seconds: 0,
            upgrades: UPGRADES.iter().map(|u| UpgradeState::new(u.id)).collect(),
            hired_managers: Vec::new(),
            owned_artifacts: Vec::new(),
            unlocked_techs: Vec::new(),
            inventory: Vec::new(),
            active_boosts: Vec::new(),
            player_level: 1,
            claimed_reward_level: 1,
            last_save_time: current_time,
            session_taps: 0,
            recent_events: VecDeque::with_capacity(RECENT_EVENT_CAPACITY),
        }
    }

    /// Current level of an extractor (0 when unknown or unbought).
    pub fn upgrade_level(&self, id: &str) -> u32 {
        self.upgrades
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.level)
            .unwrap_or(0)
    }

    /// Total levels across all extractors.
    pub fn total_upgrade_levels(&self) -> u32 {
        self.upgrades.iter().map(|u| u.level).sum()
    }

    pub fn has_manager(&self, id: &str) -> bool {
        self.hired_managers.iter().any(|m| m == id)
    }

    pub fn has_artifact(&self, id: &str) -> bool {
        self.owned_artifacts.iter().any(|a| a == id)
    }

    pub fn has_tech(&self, id: &str) -> bool {
        self.unlocked_techs.iter().any(|t| t == id)
    }

    /// Quantity of an item held (0 when absent).
    pub fn item_quantity(&self, id: &str) -> u32 {
        self.inventory
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.quantity)
            .unwrap_or(0)
    }

    /// Record a notable event for the display log.
    pub fn push_recent_event(&mut self, message: String) {
        if self.recent_events.len() >= RECENT_EVENT_CAPACITY {
            self.recent_events.pop_back();
        }
        self.recent_events.push_front(message);
    }
}
