//! Tech unlocking and table validation.

use super::data::{get_tech, TECH_TREE};
use crate::core::game_state::GameState;
use crate::error::GameError;
use std::collections::BTreeSet;

/// Spend skill points to unlock a tech node.
pub fn unlock_tech(state: &mut GameState, id: &str) -> Result<(), GameError> {
    let def = get_tech(id).ok_or_else(|| GameError::UnknownId {
        kind: "tech",
        id: id.to_string(),
    })?;
    if state.has_tech(id) {
        return Err(GameError::AlreadyUnlocked(id.to_string()));
    }
    for req in def.requires {
        if !state.has_tech(req) {
            return Err(GameError::PrerequisiteMissing {
                id: id.to_string(),
                missing: (*req).to_string(),
            });
        }
    }
    if state.skill_points < def.cost {
        return Err(GameError::InsufficientSkillPoints {
            needed: def.cost,
            available: state.skill_points,
        });
    }
    state.skill_points -= def.cost;
    state.unlocked_techs.push(def.id.to_string());
    Ok(())
}

/// Validate the static tree: unique ids, resolvable prerequisites, no
/// cycles. Run by tests and the simulator at startup.
pub fn validate_tech_table() -> Result<(), GameError> {
    let mut ids = BTreeSet::new();
    for node in &TECH_TREE {
        if !ids.insert(node.id) {
            return Err(GameError::UnknownId {
                kind: "duplicate tech",
                id: node.id.to_string(),
            });
        }
    }
    for node in &TECH_TREE {
        for req in node.requires {
            if !ids.contains(req) {
                return Err(GameError::PrerequisiteMissing {
                    id: node.id.to_string(),
                    missing: (*req).to_string(),
                });
            }
        }
    }
    // Cycle check: repeatedly peel nodes whose prerequisites are all peeled.
    let mut resolved: BTreeSet<&str> = BTreeSet::new();
    loop {
        let before = resolved.len();
        for node in &TECH_TREE {
            if !resolved.contains(node.id)
                && node.requires.iter().all(|r| resolved.contains(r))
            {
                resolved.insert(node.id);
            }
        }
        if resolved.len() == TECH_TREE.len() {
            return Ok(());
        }
        if resolved.len() == before {
            let stuck = TECH_TREE
                .iter()
                .find(|n| !resolved.contains(n.id))
                .map(|n| n.id)
                .unwrap_or("?");
            return Err(GameError::PrerequisiteMissing {
                id: stuck.to_string(),
                missing: "acyclic ordering".to_string(),
            });
        }
    }
}
