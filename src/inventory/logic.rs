//! Inventory operations: granting, buying and consuming items.

use super::data::get_item;
use super::types::{ItemEffect, ItemStack};
use crate::boosts::logic::activate_boost;
use crate::boosts::types::BoostSource;
use crate::core::game_state::GameState;
use crate::error::GameError;

/// Add `quantity` of an item to the inventory, stacking with any held.
pub fn add_item(state: &mut GameState, id: &str, quantity: u32) -> Result<(), GameError> {
    if quantity == 0 {
        return Err(GameError::ZeroQuantity);
    }
    let def = get_item(id).ok_or_else(|| GameError::UnknownId {
        kind: "item",
        id: id.to_string(),
    })?;
    if let Some(stack) = state.inventory.iter_mut().find(|s| s.id == def.id) {
        stack.quantity += quantity;
    } else {
        state.inventory.push(ItemStack {
            id: def.id.to_string(),
            quantity,
        });
    }
    Ok(())
}

/// Buy items from the supply depot with gems.
pub fn buy_item(state: &mut GameState, id: &str, quantity: u32) -> Result<(), GameError> {
    if quantity == 0 {
        return Err(GameError::ZeroQuantity);
    }
    let def = get_item(id).ok_or_else(|| GameError::UnknownId {
        kind: "item",
        id: id.to_string(),
    })?;
    let price = def.gem_price.ok_or_else(|| GameError::UnknownId {
        kind: "depot item",
        id: id.to_string(),
    })?;
    let total = price * quantity as u64;
    if state.gems < total {
        return Err(GameError::InsufficientGems {
            needed: total,
            available: state.gems,
        });
    }
    state.gems -= total;
    add_item(state, id, quantity)
}

/// Consume one item from a stack and activate its boost.
///
/// Trophy items (no effect) cannot be used. The stack entry is removed
/// when the last one is consumed. If the boost cannot start (same effect
/// already running), the item is not consumed.
pub fn use_item(state: &mut GameState, id: &str, now: i64) -> Result<ItemEffect, GameError> {
    let def = get_item(id).ok_or_else(|| GameError::UnknownId {
        kind: "item",
        id: id.to_string(),
    })?;
    let effect = def.effect.ok_or_else(|| GameError::ItemNotUsable(id.to_string()))?;

    let held = state.item_quantity(id);
    if held == 0 {
        return Err(GameError::EmptyStack(id.to_string()));
    }

    activate_boost(
        state,
        effect.effect,
        effect.multiplier,
        Some(effect.duration_seconds),
        BoostSource::Item,
        now,
    )?;

    if let Some(pos) = state.inventory.iter().position(|s| s.id == id) {
        state.inventory[pos].quantity -= 1;
        if state.inventory[pos].quantity == 0 {
            state.inventory.remove(pos);
        }
    }
    Ok(effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boosts::logic::stacked_multiplier;
    use crate::boosts::types::BoostEffect;

    #[test]
    fn test_add_and_stack() {
        let mut state = GameState::new(0);
        add_item(&mut state, "drill_bit", 2).unwrap();
        add_item(&mut state, "drill_bit", 3).unwrap();
        assert_eq!(state.item_quantity("drill_bit"), 5);
        assert_eq!(state.inventory.len(), 1);
    }

    #[test]
    fn test_add_unknown_or_zero() {
        let mut state = GameState::new(0);
        assert!(matches!(
            add_item(&mut state, "warp_core", 1),
            Err(GameError::UnknownId { .. })
        ));
        assert_eq!(add_item(&mut state, "drill_bit", 0), Err(GameError::ZeroQuantity));
    }

    #[test]
    fn test_buy_item_spends_gems() {
        let mut state = GameState::new(0);
        state.gems = 25;
        buy_item(&mut state, "drill_bit", 2).unwrap();
        assert_eq!(state.gems, 5);
        assert_eq!(state.item_quantity("drill_bit"), 2);

        let err = buy_item(&mut state, "fuel_cell", 1).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientGems {
                needed: 15,
                available: 5
            }
        );
    }

    #[test]
    fn test_buy_unsold_item_rejected() {
        let mut state = GameState::new(0);
        state.gems = 1000;
        assert!(buy_item(&mut state, "plasma_lance", 1).is_err());
    }

    #[test]
    fn test_use_item_activates_boost_and_consumes() {
        let mut state = GameState::new(0);
        add_item(&mut state, "fuel_cell", 1).unwrap();

        let effect = use_item(&mut state, "fuel_cell", 500).unwrap();
        assert_eq!(effect.effect, BoostEffect::IncomeRate);
        assert_eq!(stacked_multiplier(&state, BoostEffect::IncomeRate), 2.0);
        assert_eq!(state.item_quantity("fuel_cell"), 0);
        assert!(state.inventory.is_empty());
        assert_eq!(state.active_boosts[0].activated_at, 500);
    }

    #[test]
    fn test_use_item_not_consumed_when_boost_blocked() {
        let mut state = GameState::new(0);
        add_item(&mut state, "fuel_cell", 1).unwrap();
        add_item(&mut state, "overclock_chip", 1).unwrap();

        use_item(&mut state, "fuel_cell", 0).unwrap();
        // Second income boost is blocked while the first runs
        let err = use_item(&mut state, "overclock_chip", 0).unwrap_err();
        assert_eq!(err, GameError::BoostAlreadyActive("income"));
        assert_eq!(state.item_quantity("overclock_chip"), 1);
    }

    #[test]
    fn test_use_trophy_rejected() {
        let mut state = GameState::new(0);
        add_item(&mut state, "meteor_shard", 1).unwrap();
        assert!(matches!(
            use_item(&mut state, "meteor_shard", 0),
            Err(GameError::ItemNotUsable(_))
        ));
    }

    #[test]
    fn test_use_empty_stack() {
        let mut state = GameState::new(0);
        assert!(matches!(
            use_item(&mut state, "drill_bit", 0),
            Err(GameError::EmptyStack(_))
        ));
    }
}
