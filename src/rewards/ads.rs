//! Rewarded-ad grants.
//!
//! The mediation plugin's show/reward flow stays outside the crate; the
//! shell calls [`grant_ad_reward`] from the reward callback. Boost-granting
//! kinds are gated by the one-timed-boost-per-effect rule, so replayed
//! callbacks cannot compound.

use crate::boosts::logic::activate_boost;
use crate::boosts::types::{BoostEffect, BoostSource};
use crate::core::constants::*;
use crate::core::game_logic::{earn_coins, income_per_second, tap_value};
use crate::core::game_state::GameState;
use crate::error::GameError;
use tracing::debug;

/// Reward kinds the ad placements can pay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdRewardKind {
    /// A lump of coins worth a couple of minutes of income.
    CoinWindfall,
    /// Tap power x3 for a minute.
    TapFrenzy,
    /// Passive income x2 for five minutes.
    IncomeSurge,
    /// Two hours of income, instantly.
    TimeWarp,
    /// A few gems.
    GemHandful,
}

/// What an ad reward actually paid out.
#[derive(Debug, Clone, PartialEq)]
pub struct AdGrant {
    pub kind: AdRewardKind,
    pub coins: f64,
    pub gems: u64,
    pub boost: Option<BoostEffect>,
}

/// Grant the reward for a completed ad.
pub fn grant_ad_reward(
    state: &mut GameState,
    kind: AdRewardKind,
    now: i64,
) -> Result<AdGrant, GameError> {
    let mut grant = AdGrant {
        kind,
        coins: 0.0,
        gems: 0,
        boost: None,
    };
    match kind {
        AdRewardKind::CoinWindfall => {
            // Early profiles have no income yet; pay in taps instead.
            let coins = (income_per_second(state) * AD_COIN_WINDFALL_SECONDS)
                .max(tap_value(state) * 25.0);
            earn_coins(state, coins);
            grant.coins = coins;
        }
        AdRewardKind::TimeWarp => {
            let coins = income_per_second(state) * AD_TIME_WARP_SECONDS;
            earn_coins(state, coins);
            grant.coins = coins;
        }
        AdRewardKind::TapFrenzy => {
            activate_boost(
                state,
                BoostEffect::TapPower,
                AD_TAP_FRENZY_MULTIPLIER,
                Some(AD_TAP_FRENZY_SECONDS),
                BoostSource::Ad,
                now,
            )?;
            grant.boost = Some(BoostEffect::TapPower);
        }
        AdRewardKind::IncomeSurge => {
            activate_boost(
                state,
                BoostEffect::IncomeRate,
                AD_INCOME_SURGE_MULTIPLIER,
                Some(AD_INCOME_SURGE_SECONDS),
                BoostSource::Ad,
                now,
            )?;
            grant.boost = Some(BoostEffect::IncomeRate);
        }
        AdRewardKind::GemHandful => {
            state.gems += AD_GEM_HANDFUL;
            grant.gems = AD_GEM_HANDFUL;
        }
    }
    debug!(?kind, coins = grant.coins, gems = grant.gems, "ad reward granted");
    Ok(grant)
}
