//! Multiplier stacking, income computation and the tap operation.
//!
//! Bonuses come from four places and always combine multiplicatively:
//! artifact perks, tech perks, active boosts, and the permanent essence
//! multiplier. Cost reduction additionally clamps at the global floor.

use super::balance::{clamp_cost_multiplier, coins_for_level, prestige_multiplier};
use super::constants::*;
use super::game_state::GameState;
use crate::artifacts::data::get_artifact;
use crate::artifacts::types::Perk;
use crate::boosts::logic::stacked_multiplier;
use crate::boosts::types::BoostEffect;
use crate::inventory::data::droppable_items;
use crate::inventory::logic::add_item;
use crate::managers::logic::manager_multiplier_for_element;
use crate::techtree::data::get_tech;
use crate::upgrades::data::UPGRADES;
use rand::Rng;

/// Multiplicative bonus totals from owned artifacts and unlocked techs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerkTotals {
    pub income: f64,
    pub tap: f64,
    pub cost: f64,
    pub essence: f64,
    pub offline: f64,
}

impl Default for PerkTotals {
    fn default() -> Self {
        Self {
            income: 1.0,
            tap: 1.0,
            cost: 1.0,
            essence: 1.0,
            offline: 1.0,
        }
    }
}

/// Fold every owned artifact perk and unlocked tech perk into totals.
pub fn perk_totals(state: &GameState) -> PerkTotals {
    let mut totals = PerkTotals::default();
    let perks = state
        .owned_artifacts
        .iter()
        .filter_map(|id| get_artifact(id).map(|a| a.perk))
        .chain(
            state
                .unlocked_techs
                .iter()
                .filter_map(|id| get_tech(id).map(|t| t.perk)),
        );
    for perk in perks {
        match perk {
            Perk::IncomeBoost(f) => totals.income *= 1.0 + f,
            Perk::TapBoost(f) => totals.tap *= 1.0 + f,
            Perk::CostReduction(f) => totals.cost *= 1.0 - f,
            Perk::EssenceGain(f) => totals.essence *= 1.0 + f,
            Perk::OfflineRate(f) => totals.offline *= 1.0 + f,
        }
    }
    totals
}

/// Global multiplier on passive income.
pub fn income_multiplier(state: &GameState) -> f64 {
    perk_totals(state).income
        * prestige_multiplier(state.essence)
        * stacked_multiplier(state, BoostEffect::IncomeRate)
}

/// Multiplier applied to upgrade and bulk-upgrade prices, floored at 50%.
pub fn cost_multiplier(state: &GameState) -> f64 {
    clamp_cost_multiplier(
        perk_totals(state).cost * stacked_multiplier(state, BoostEffect::CostReduction),
    )
}

/// Multiplier on the essence reward at prestige time.
pub fn essence_gain_multiplier(state: &GameState) -> f64 {
    perk_totals(state).essence * stacked_multiplier(state, BoostEffect::EssenceGain)
}

/// Multiplier on the offline earnings rate.
pub fn offline_rate_multiplier(state: &GameState) -> f64 {
    perk_totals(state).offline
}

/// Passive coins per second from all extractors, fully multiplied.
pub fn income_per_second(state: &GameState) -> f64 {
    let raw: f64 = UPGRADES
        .iter()
        .map(|def| {
            let level = state.upgrade_level(def.id);
            if level == 0 {
                return 0.0;
            }
            level as f64 * def.base_income * manager_multiplier_for_element(state, def.id)
        })
        .sum();
    raw * income_multiplier(state)
}

/// Coins one ordinary tap is worth.
///
/// The essence multiplier reaches the flat base directly and the income
/// fraction through [`income_per_second`], so it is never applied twice.
pub fn tap_value(state: &GameState) -> f64 {
    let base = TAP_BASE_VALUE * prestige_multiplier(state.essence)
        + income_per_second(state) * TAP_INCOME_FRACTION;
    base * perk_totals(state).tap * stacked_multiplier(state, BoostEffect::TapPower)
}

/// Credit earned coins to both the balance and the lifetime counter.
pub fn earn_coins(state: &mut GameState, amount: f64) {
    state.coins += amount;
    state.total_coins_earned += amount;
}

/// What a single tap produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TapOutcome {
    pub coins_earned: f64,
    pub lucky: bool,
    /// Item id of a found supply cache, if the roll hit.
    pub item_found: Option<&'static str>,
}

/// Process one tap: credit coins, roll for a lucky strike and a cache.
pub fn tap<R: Rng>(state: &mut GameState, rng: &mut R) -> TapOutcome {
    let mut value = tap_value(state);
    let lucky = rng.gen_bool(LUCKY_TAP_CHANCE);
    if lucky {
        value *= LUCKY_TAP_MULTIPLIER;
        state.lucky_taps += 1;
    }
    earn_coins(state, value);
    state.total_taps += 1;
    state.session_taps += 1;

    let item_found = if rng.gen_bool(TAP_ITEM_FIND_CHANCE) {
        roll_item_find(state, rng)
    } else {
        None
    };

    TapOutcome {
        coins_earned: value,
        lucky,
        item_found,
    }
}

/// Pick a random droppable item and add one to the inventory.
pub(crate) fn roll_item_find<R: Rng>(state: &mut GameState, rng: &mut R) -> Option<&'static str> {
    let pool = droppable_items();
    if pool.is_empty() {
        return None;
    }
    let def = pool[rng.gen_range(0..pool.len())];
    // The id comes from the static table, so this cannot fail.
    add_item(state, def.id, 1).ok()?;
    state.items_found += 1;
    Some(def.id)
}

/// Bring `player_level` up to the level implied by lifetime coins.
/// Returns each level crossed, in order. Walks up from the current level
/// rather than recomputing from scratch, so the per-tick cost stays flat.
pub fn sync_player_level(state: &mut GameState) -> Vec<u32> {
    let mut crossed = Vec::new();
    while coins_for_level(state.player_level + 1) <= state.total_coins_earned {
        state.player_level += 1;
        crossed.push(state.player_level);
    }
    crossed
}
