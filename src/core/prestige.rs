use super::balance::essence_reward;
use super::constants::PRESTIGE_MIN_LIFETIME_COINS;
use super::game_logic::essence_gain_multiplier;
use super::game_state::GameState;
use crate::error::GameError;
use crate::upgrades::data::UPGRADES;
use crate::upgrades::types::UpgradeState;
use tracing::info;

/// What a prestige paid out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrestigeOutcome {
    pub essence_gained: u64,
    pub total_essence: u64,
    pub prestige_count: u32,
}

/// Essence a prestige would grant right now, gain perks included.
///
/// Computed on coins earned since the last prestige, so back-to-back
/// resets pay nothing.
pub fn pending_essence_reward(state: &GameState) -> u64 {
    let earned_this_run = state.total_coins_earned - state.coins_at_last_prestige;
    essence_reward(earned_this_run, essence_gain_multiplier(state))
}

/// Whether a prestige is currently worth anything.
///
/// Requires the coin threshold for this run and a non-zero essence payout.
pub fn can_prestige(state: &GameState) -> bool {
    state.total_coins_earned - state.coins_at_last_prestige >= PRESTIGE_MIN_LIFETIME_COINS
        && pending_essence_reward(state) > 0
}

/// Trade the run for essence.
///
/// Resets coins, extractor levels, hired managers and every timed boost.
/// Gems, essence, skill points, artifacts, tech, inventory, permanent
/// boosts, lifetime counters and level progression all survive.
pub fn perform_prestige(state: &mut GameState) -> Result<PrestigeOutcome, GameError> {
    if !can_prestige(state) {
        return Err(GameError::PrestigeNotReady {
            needed: PRESTIGE_MIN_LIFETIME_COINS,
            available: state.total_coins_earned,
        });
    }
    let gained = pending_essence_reward(state);

    state.coins = 0.0;
    state.upgrades = UPGRADES.iter().map(|u| UpgradeState::new(u.id)).collect();
    state.hired_managers.clear();
    state.active_boosts.retain(|b| b.is_permanent());
    state.coins_at_last_prestige = state.total_coins_earned;

    state.essence += gained;
    state.total_essence_earned += gained;
    state.prestige_count += 1;

    info!(
        essence = gained,
        total = state.essence,
        count = state.prestige_count,
        "prestige complete"
    );

    Ok(PrestigeOutcome {
        essence_gained: gained,
        total_essence: state.essence,
        prestige_count: state.prestige_count,
    })
}
