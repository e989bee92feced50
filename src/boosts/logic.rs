//! Boost activation, stacking and expiry.
//!
//! Different effects stack multiplicatively. A second *timed* boost of the
//! same effect is rejected rather than stacked, which is also the gate that
//! keeps repeated ad-reward callbacks from compounding.

use super::types::{ActiveBoost, BoostEffect, BoostSource};
use crate::core::game_state::GameState;
use crate::error::GameError;

/// Activate a boost, stamping the current time.
///
/// Timed boosts reject a same-effect timed boost already running; a second
/// permanent boost of the same effect is likewise rejected.
pub fn activate_boost(
    state: &mut GameState,
    effect: BoostEffect,
    multiplier: f64,
    duration_seconds: Option<f64>,
    source: BoostSource,
    now: i64,
) -> Result<(), GameError> {
    let clash = state.active_boosts.iter().any(|b| {
        b.effect == effect && b.is_permanent() == duration_seconds.is_none()
    });
    if clash {
        return Err(GameError::BoostAlreadyActive(effect.name()));
    }
    state.active_boosts.push(ActiveBoost {
        effect,
        multiplier,
        source,
        activated_at: now,
        remaining_seconds: duration_seconds,
    });
    Ok(())
}

/// Product of all active multipliers for one effect (1.0 when none).
pub fn stacked_multiplier(state: &GameState, effect: BoostEffect) -> f64 {
    state
        .active_boosts
        .iter()
        .filter(|b| b.effect == effect)
        .map(|b| b.multiplier)
        .product()
}

/// Advance boost timers by `seconds`, dropping the ones that ran out.
/// Returns the expired effects in their original order.
pub fn elapse_boosts(state: &mut GameState, seconds: f64) -> Vec<BoostEffect> {
    let mut expired = Vec::new();
    state.active_boosts.retain_mut(|b| match b.remaining_seconds.as_mut() {
        None => true,
        Some(remaining) => {
            *remaining -= seconds;
            if *remaining <= 0.0 {
                expired.push(b.effect);
                false
            } else {
                true
            }
        }
    });
    expired
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(0)
    }

    #[test]
    fn test_activate_and_stack() {
        let mut s = state();
        activate_boost(&mut s, BoostEffect::TapPower, 3.0, Some(60.0), BoostSource::Ad, 100)
            .unwrap();
        activate_boost(
            &mut s,
            BoostEffect::TapPower,
            2.0,
            None,
            BoostSource::Purchase,
            100,
        )
        .unwrap();

        // Timed and permanent coexist and multiply
        assert_eq!(stacked_multiplier(&s, BoostEffect::TapPower), 6.0);
        assert_eq!(stacked_multiplier(&s, BoostEffect::IncomeRate), 1.0);
    }

    #[test]
    fn test_same_effect_timed_rejected() {
        let mut s = state();
        activate_boost(&mut s, BoostEffect::IncomeRate, 2.0, Some(300.0), BoostSource::Ad, 0)
            .unwrap();
        let err = activate_boost(
            &mut s,
            BoostEffect::IncomeRate,
            2.0,
            Some(300.0),
            BoostSource::Ad,
            10,
        )
        .unwrap_err();
        assert_eq!(err, GameError::BoostAlreadyActive("income"));
    }

    #[test]
    fn test_second_permanent_rejected() {
        let mut s = state();
        activate_boost(&mut s, BoostEffect::IncomeRate, 2.0, None, BoostSource::Purchase, 0)
            .unwrap();
        assert!(activate_boost(
            &mut s,
            BoostEffect::IncomeRate,
            2.0,
            None,
            BoostSource::Purchase,
            0
        )
        .is_err());
    }

    #[test]
    fn test_elapse_expires_in_order() {
        let mut s = state();
        activate_boost(&mut s, BoostEffect::TapPower, 3.0, Some(5.0), BoostSource::Item, 0)
            .unwrap();
        activate_boost(&mut s, BoostEffect::IncomeRate, 2.0, Some(20.0), BoostSource::Ad, 0)
            .unwrap();
        activate_boost(&mut s, BoostEffect::EssenceGain, 1.5, None, BoostSource::Purchase, 0)
            .unwrap();

        let expired = elapse_boosts(&mut s, 10.0);
        assert_eq!(expired, vec![BoostEffect::TapPower]);
        assert_eq!(s.active_boosts.len(), 2);

        let expired = elapse_boosts(&mut s, 10.0);
        assert_eq!(expired, vec![BoostEffect::IncomeRate]);

        // Permanent boost never expires
        let expired = elapse_boosts(&mut s, 1e9);
        assert!(expired.is_empty());
        assert_eq!(s.active_boosts.len(), 1);
    }

    #[test]
    fn test_partial_elapse_keeps_boost() {
        let mut s = state();
        activate_boost(&mut s, BoostEffect::TapPower, 3.0, Some(60.0), BoostSource::Ad, 0)
            .unwrap();
        let expired = elapse_boosts(&mut s, 59.9);
        assert!(expired.is_empty());
        let remaining = s.active_boosts[0].remaining_seconds.unwrap();
        assert!((remaining - 0.1).abs() < 1e-9);
    }
}
