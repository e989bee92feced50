//! The central per-tick orchestration function.
//!
//! This module contains the `game_tick()` function that processes a single
//! 100ms game tick, applying passive income, expiring boosts, handling
//! level-ups and their rewards, rolling idle salvage finds, and feeding the
//! achievement registry. It returns a [`TickResult`] describing what
//! happened so a presentation layer can update itself without game logic
//! depending on any UI types.

use super::constants::{
    AUTOSAVE_INTERVAL_SECONDS, TICKS_PER_SECOND, TICK_INTERVAL_MS, TICK_ITEM_FIND_CHANCE,
};
use super::game_logic::{earn_coins, income_per_second, roll_item_find, sync_player_level};
use super::game_state::GameState;
use crate::achievements::data::get_achievement_def;
use crate::achievements::types::Achievements;
use crate::boosts::logic::elapse_boosts;
use crate::boosts::types::BoostEffect;
use crate::inventory::data::get_item;
use crate::rewards::levels::claim_pending_level_rewards;
use rand::Rng;

/// A single event produced by a game tick.
///
/// The presentation layer maps these to log lines, toasts and effects.
#[derive(Debug, Clone)]
pub enum TickEvent {
    /// Player reached a new level (may fire several times in one tick
    /// after a large windfall).
    LeveledUp { new_level: u32 },

    /// A level reward was paid out.
    LevelRewardClaimed {
        level: u32,
        gems: u64,
        skill_points: u32,
        item: Option<&'static str>,
        message: String,
    },

    /// A timed boost ran out.
    BoostExpired {
        effect: BoostEffect,
        message: String,
    },

    /// A salvage drone dropped a supply cache.
    CacheFound {
        item_id: &'static str,
        message: String,
    },

    /// An achievement was unlocked during this tick.
    AchievementUnlocked {
        name: String,
        reward_gems: u64,
        message: String,
    },
}

/// Result of processing a single game tick.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Events produced during this tick, in chronological order.
    pub events: Vec<TickEvent>,

    /// True if achievements were modified and should be persisted to disk.
    /// The presentation layer is responsible for the actual IO.
    pub achievements_changed: bool,

    /// True when the autosave interval elapsed on this tick.
    pub autosave_due: bool,
}

/// Processes a single 100ms game tick.
///
/// # Arguments
/// - `state` — Mutable game state.
/// - `tick_counter` — Counts ticks for play-time tracking (10 ticks = 1
///   second). Caller owns this counter across ticks.
/// - `achievements` — Mutable global achievement registry.
/// - `rng` — Random number generator. Pass `&mut rand::thread_rng()` in
///   production, or a seeded `rand_chacha::ChaCha8Rng` in tests for
///   deterministic behavior.
///
/// # Returns
/// A [`TickResult`]; the caller is responsible for persisting achievements
/// when `achievements_changed` is set and the save blob when
/// `autosave_due` is set.
pub fn game_tick<R: Rng>(
    state: &mut GameState,
    tick_counter: &mut u32,
    achievements: &mut Achievements,
    rng: &mut R,
) -> TickResult {
    let mut result = TickResult::default();
    let delta_time = TICK_INTERVAL_MS as f64 / 1000.0;

    // ── 1. Passive income ───────────────────────────────────────
    let income = income_per_second(state) * delta_time;
    if income > 0.0 {
        earn_coins(state, income);
    }

    // ── 2. Boost timers ─────────────────────────────────────────
    for effect in elapse_boosts(state, delta_time) {
        result.events.push(TickEvent::BoostExpired {
            effect,
            message: format!("\u{23f3} Your {} boost wore off.", effect.name()),
        });
    }

    // ── 3. Level-ups and their rewards ──────────────────────────
    for new_level in sync_player_level(state) {
        result.events.push(TickEvent::LeveledUp { new_level });
    }
    for claimed in claim_pending_level_rewards(state) {
        let message = format!(
            "\u{1f381} Level {} reward: {} gems, {} skill points",
            claimed.level, claimed.gems, claimed.skill_points
        );
        result.events.push(TickEvent::LevelRewardClaimed {
            level: claimed.level,
            gems: claimed.gems,
            skill_points: claimed.skill_points,
            item: claimed.item,
            message,
        });
    }

    // ── 4. Idle salvage roll ────────────────────────────────────
    if rng.gen_bool(TICK_ITEM_FIND_CHANCE) {
        if let Some(item_id) = roll_item_find(state, rng) {
            let name = get_item(item_id).map(|d| d.name).unwrap_or(item_id);
            let message = format!("\u{1f4e6} A salvage drone drops off: {}", name);
            state.push_recent_event(message.clone());
            result.events.push(TickEvent::CacheFound { item_id, message });
        }
    }

    // ── 5. Achievements ─────────────────────────────────────────
    achievements.evaluate(state);
    collect_achievement_events(state, achievements, &mut result);

    // ── 6. Play time and autosave cadence ───────────────────────
    *tick_counter += 1;
    if *tick_counter >= TICKS_PER_SECOND {
        state.play_time_seconds += 1;
        *tick_counter = 0;
        if state.play_time_seconds % AUTOSAVE_INTERVAL_SECONDS == 0 {
            result.autosave_due = true;
        }
    }

    result
}

/// Collect newly unlocked achievements into TickResult events and pay out
/// their gem rewards.
fn collect_achievement_events(
    state: &mut GameState,
    achievements: &mut Achievements,
    result: &mut TickResult,
) {
    for id in achievements.take_newly_unlocked() {
        if let Some(def) = get_achievement_def(id) {
            state.gems += def.reward_gems;
            let message = format!(
                "\u{1f3c6} Achievement Unlocked: {} (+{} gems)",
                def.name, def.reward_gems
            );
            state.push_recent_event(message.clone());
            result.events.push(TickEvent::AchievementUnlocked {
                name: def.name.to_string(),
                reward_gems: def.reward_gems,
                message,
            });
            result.achievements_changed = true;
        }
    }
}
