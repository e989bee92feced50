//! Shared balance formulas used by both game and simulator.
//!
//! All core curve math lives here as pure functions of plain numbers.
//! Change once, test everywhere.

use super::constants::*;

/// Cost of the next level of an extractor at `level` (0-based owned levels).
pub fn upgrade_cost(base_cost: f64, growth: f64, level: u32) -> f64 {
    base_cost * growth.powi(level as i32)
}

/// Cost of buying `count` consecutive levels starting at `level`.
///
/// Geometric series: base * g^level * (g^count - 1) / (g - 1).
pub fn bulk_upgrade_cost(base_cost: f64, growth: f64, level: u32, count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    if (growth - 1.0).abs() < f64::EPSILON {
        return base_cost * count as f64;
    }
    let first = upgrade_cost(base_cost, growth, level);
    first * (growth.powi(count as i32) - 1.0) / (growth - 1.0)
}

/// Largest number of consecutive levels affordable with `coins`,
/// starting at `level`. Inverse of the geometric series, floored.
pub fn max_affordable_levels(base_cost: f64, growth: f64, level: u32, coins: f64) -> u32 {
    if coins <= 0.0 {
        return 0;
    }
    let first = upgrade_cost(base_cost, growth, level);
    if (growth - 1.0).abs() < f64::EPSILON {
        return (coins / first).floor() as u32;
    }
    // coins >= first * (g^n - 1) / (g - 1)  =>  n <= log_g(coins*(g-1)/first + 1)
    let n = (coins * (growth - 1.0) / first + 1.0).log(growth).floor();
    if n.is_finite() && n > 0.0 {
        n as u32
    } else {
        0
    }
}

/// Total lifetime coins required to reach `level`. Level 1 is free.
pub fn coins_for_level(level: u32) -> f64 {
    if level <= 1 {
        return 0.0;
    }
    LEVEL_CURVE_BASE * f64::powf((level - 1) as f64, LEVEL_CURVE_EXPONENT)
}

/// Player level implied by lifetime coins earned.
pub fn level_for_total_coins(total_coins_earned: f64) -> u32 {
    let mut level = 1;
    while coins_for_level(level + 1) <= total_coins_earned {
        level += 1;
    }
    level
}

/// Essence granted by a prestige at `total_coins_earned` lifetime coins.
///
/// `gain_mult` stacks essence-gain perks (1.0 = none). Monotonically
/// non-decreasing in lifetime coins for any fixed `gain_mult`.
pub fn essence_reward(total_coins_earned: f64, gain_mult: f64) -> u64 {
    if total_coins_earned < ESSENCE_COIN_BASE {
        return 0;
    }
    let base = (total_coins_earned / ESSENCE_COIN_BASE).sqrt();
    (base * gain_mult).floor() as u64
}

/// Permanent income multiplier from banked essence.
pub fn prestige_multiplier(essence: u64) -> f64 {
    1.0 + essence as f64 * ESSENCE_INCOME_BONUS
}

/// Clamp a stacked cost multiplier to the reduction floor.
pub fn clamp_cost_multiplier(mult: f64) -> f64 {
    mult.max(COST_REDUCTION_FLOOR)
}

/// Coins earned passively over `elapsed_seconds` while away, at the
/// given online rate. Capped at [`MAX_OFFLINE_SECONDS`].
pub fn offline_coins(elapsed_seconds: i64, income_per_second: f64, offline_rate_mult: f64) -> f64 {
    if elapsed_seconds <= 0 {
        return 0.0;
    }
    let capped = elapsed_seconds.min(MAX_OFFLINE_SECONDS) as f64;
    capped * income_per_second * OFFLINE_MULTIPLIER * offline_rate_mult
}
