//! Extractor purchases.

use super::data::get_upgrade;
use super::types::UpgradeDef;
use crate::core::balance::{bulk_upgrade_cost, max_affordable_levels, upgrade_cost};
use crate::core::game_logic::cost_multiplier;
use crate::core::game_state::GameState;
use crate::error::GameError;

/// Outcome of a successful purchase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurchaseOutcome {
    pub levels_bought: u32,
    pub coins_spent: f64,
    pub new_level: u32,
}

fn lookup(id: &str) -> Result<&'static UpgradeDef, GameError> {
    get_upgrade(id).ok_or_else(|| GameError::UnknownId {
        kind: "extractor",
        id: id.to_string(),
    })
}

/// Price of the next single level, cost reductions applied.
pub fn next_cost(state: &GameState, id: &str) -> Result<f64, GameError> {
    let def = lookup(id)?;
    Ok(upgrade_cost(def.base_cost, def.cost_growth, state.upgrade_level(id))
        * cost_multiplier(state))
}

/// How many consecutive levels the current balance affords.
pub fn max_affordable(state: &GameState, id: &str) -> Result<u32, GameError> {
    let def = lookup(id)?;
    // Divide the balance by the discount instead of discounting each term.
    let effective_coins = state.coins / cost_multiplier(state);
    Ok(max_affordable_levels(
        def.base_cost,
        def.cost_growth,
        state.upgrade_level(id),
        effective_coins,
    ))
}

/// Buy `quantity` levels of an extractor at the geometric-series price.
pub fn buy_upgrade(
    state: &mut GameState,
    id: &str,
    quantity: u32,
) -> Result<PurchaseOutcome, GameError> {
    if quantity == 0 {
        return Err(GameError::ZeroQuantity);
    }
    let def = lookup(id)?;
    if state.total_coins_earned < def.unlock_at {
        return Err(GameError::UpgradeLocked(id.to_string()));
    }
    let level = state.upgrade_level(id);
    let cost = bulk_upgrade_cost(def.base_cost, def.cost_growth, level, quantity)
        * cost_multiplier(state);
    if state.coins < cost {
        return Err(GameError::InsufficientCoins {
            needed: cost,
            available: state.coins,
        });
    }
    state.coins -= cost;
    let entry = state
        .upgrades
        .iter_mut()
        .find(|u| u.id == id)
        .ok_or_else(|| GameError::UnknownId {
            kind: "extractor",
            id: id.to_string(),
        })?;
    entry.level += quantity;
    let new_level = entry.level;
    Ok(PurchaseOutcome {
        levels_bought: quantity,
        coins_spent: cost,
        new_level,
    })
}
