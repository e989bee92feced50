//! Hiring and bonus lookup for managers.

use super::data::{get_manager, MANAGERS};
use crate::core::game_state::GameState;
use crate::error::GameError;

/// Hire a manager for coins.
///
/// Requires the extractor to have at least one level; hiring twice is
/// rejected.
pub fn hire_manager(state: &mut GameState, id: &str) -> Result<(), GameError> {
    let def = get_manager(id).ok_or_else(|| GameError::UnknownId {
        kind: "manager",
        id: id.to_string(),
    })?;
    if state.has_manager(id) {
        return Err(GameError::AlreadyHired(id.to_string()));
    }
    if state.upgrade_level(def.element) == 0 {
        return Err(GameError::ManagerWithoutExtractor(id.to_string()));
    }
    if state.coins < def.hire_cost {
        return Err(GameError::InsufficientCoins {
            needed: def.hire_cost,
            available: state.coins,
        });
    }
    state.coins -= def.hire_cost;
    state.hired_managers.push(def.id.to_string());
    Ok(())
}

/// Income multiplier a hired manager contributes to one element
/// (1.0 when unmanaged).
pub fn manager_multiplier_for_element(state: &GameState, element: &str) -> f64 {
    MANAGERS
        .iter()
        .find(|m| m.element == element && state.has_manager(m.id))
        .map(|m| m.income_mult)
        .unwrap_or(1.0)
}
