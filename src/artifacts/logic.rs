//! Artifact purchases.

use super::data::get_artifact;
use super::types::ArtifactCost;
use crate::core::game_state::GameState;
use crate::error::GameError;

/// Buy an artifact with whichever currency it is priced in.
/// Artifacts are one-per-profile and survive prestige.
pub fn buy_artifact(state: &mut GameState, id: &str) -> Result<(), GameError> {
    let def = get_artifact(id).ok_or_else(|| GameError::UnknownId {
        kind: "artifact",
        id: id.to_string(),
    })?;
    if state.has_artifact(id) {
        return Err(GameError::AlreadyOwned(id.to_string()));
    }
    match def.cost {
        ArtifactCost::Essence(cost) => {
            if state.essence < cost {
                return Err(GameError::InsufficientEssence {
                    needed: cost,
                    available: state.essence,
                });
            }
            state.essence -= cost;
        }
        ArtifactCost::Gems(cost) => {
            if state.gems < cost {
                return Err(GameError::InsufficientGems {
                    needed: cost,
                    available: state.gems,
                });
            }
            state.gems -= cost;
        }
    }
    state.owned_artifacts.push(def.id.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_with_essence() {
        let mut state = GameState::new(0);
        state.essence = 3;
        buy_artifact(&mut state, "dusty_pickaxe").unwrap();
        assert_eq!(state.essence, 2);
        assert!(state.has_artifact("dusty_pickaxe"));
    }

    #[test]
    fn test_buy_with_gems() {
        let mut state = GameState::new(0);
        state.gems = 200;
        buy_artifact(&mut state, "broker_sigil").unwrap();
        assert_eq!(state.gems, 50);
    }

    #[test]
    fn test_buy_twice_rejected() {
        let mut state = GameState::new(0);
        state.essence = 10;
        buy_artifact(&mut state, "dusty_pickaxe").unwrap();
        assert!(matches!(
            buy_artifact(&mut state, "dusty_pickaxe"),
            Err(GameError::AlreadyOwned(_))
        ));
        assert_eq!(state.essence, 9);
    }

    #[test]
    fn test_buy_without_funds() {
        let mut state = GameState::new(0);
        assert!(matches!(
            buy_artifact(&mut state, "miners_almanac"),
            Err(GameError::InsufficientEssence { .. })
        ));
        assert!(matches!(
            buy_artifact(&mut state, "broker_sigil"),
            Err(GameError::InsufficientGems { .. })
        ));
    }

    #[test]
    fn test_buy_unknown() {
        let mut state = GameState::new(0);
        assert!(matches!(
            buy_artifact(&mut state, "sword_of_omens"),
            Err(GameError::UnknownId { .. })
        ));
    }
}
