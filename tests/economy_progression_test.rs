//! Integration test: Economy progression
//!
//! Walks a profile through the buy/hire/research loop and checks the
//! balance properties the formulas promise: rising costs, rising income,
//! and unlock gates that follow lifetime earnings.

use astromine::core::game_logic::{income_per_second, tap_value};
use astromine::error::GameError;
use astromine::managers::logic::hire_manager;
use astromine::techtree::logic::unlock_tech;
use astromine::upgrades::data::UPGRADES;
use astromine::upgrades::logic::{buy_upgrade, max_affordable, next_cost};
use astromine::GameState;

#[test]
fn test_costs_rise_with_every_purchase() {
    let mut state = GameState::new(0);
    state.coins = 1e12;

    let mut last_cost = 0.0;
    for _ in 0..50 {
        let cost = next_cost(&state, "hydrogen").unwrap();
        assert!(cost > last_cost, "cost must rise: {} after {}", cost, last_cost);
        buy_upgrade(&mut state, "hydrogen", 1).unwrap();
        last_cost = cost;
    }
}

#[test]
fn test_income_rises_with_every_purchase() {
    let mut state = GameState::new(0);
    state.coins = 1e12;
    state.total_coins_earned = 1e12;

    let mut last_income = income_per_second(&state);
    for def in UPGRADES.iter().take(4) {
        buy_upgrade(&mut state, def.id, 10).unwrap();
        let income = income_per_second(&state);
        assert!(income > last_income, "{} should add income", def.id);
        last_income = income;
    }
}

#[test]
fn test_unlock_gates_follow_lifetime_earnings() {
    let mut state = GameState::new(0);
    state.coins = 1e12; // balance alone is not enough

    for def in UPGRADES.iter().skip(1) {
        let err = buy_upgrade(&mut state, def.id, 1).unwrap_err();
        assert!(
            matches!(err, GameError::UpgradeLocked(_)),
            "{} should be locked at zero lifetime earnings",
            def.id
        );
    }

    // Spending never unlocks anything; earning does
    state.total_coins_earned = UPGRADES[1].unlock_at;
    assert!(buy_upgrade(&mut state, UPGRADES[1].id, 1).is_ok());
    assert!(matches!(
        buy_upgrade(&mut state, UPGRADES[2].id, 1),
        Err(GameError::UpgradeLocked(_))
    ));
}

#[test]
fn test_manager_pays_for_itself_in_income() {
    let mut state = GameState::new(0);
    state.coins = 5e3;
    state.total_coins_earned = 5e3;
    buy_upgrade(&mut state, "hydrogen", 20).unwrap();

    let before = income_per_second(&state);
    hire_manager(&mut state, "hydrogen_foreman").unwrap();
    let after = income_per_second(&state);

    assert!((after / before - 2.0).abs() < 1e-9, "foreman doubles hydrogen");
}

#[test]
fn test_tap_scales_with_economy() {
    let mut state = GameState::new(0);
    let early_tap = tap_value(&state);

    state.coins = 1e12;
    state.total_coins_earned = 1e12;
    for def in UPGRADES.iter().take(6) {
        buy_upgrade(&mut state, def.id, 25).unwrap();
    }

    let late_tap = tap_value(&state);
    assert!(
        late_tap > early_tap * 100.0,
        "taps should grow with passive income: {} vs {}",
        late_tap,
        early_tap
    );
}

#[test]
fn test_research_compounds_with_managers() {
    let mut state = GameState::new(0);
    state.coins = 1e6;
    state.total_coins_earned = 1e6;
    buy_upgrade(&mut state, "hydrogen", 50).unwrap();
    hire_manager(&mut state, "hydrogen_foreman").unwrap();
    let base = income_per_second(&state);

    state.skill_points = 3;
    unlock_tech(&mut state, "conveyor_lines").unwrap(); // +15%
    unlock_tech(&mut state, "smart_scheduling").unwrap(); // +25%

    let ratio = income_per_second(&state) / base;
    assert!((ratio - 1.15 * 1.25).abs() < 1e-9);
}

#[test]
fn test_max_affordable_never_overspends() {
    let mut state = GameState::new(0);
    state.total_coins_earned = 1e12;

    for coins in [15.0, 999.0, 123_456.0, 9.9e7] {
        let mut s = state.clone();
        s.coins = coins;
        let n = max_affordable(&s, "hydrogen").unwrap();
        if n > 0 {
            buy_upgrade(&mut s, "hydrogen", n).unwrap();
            assert!(s.coins >= 0.0);
        }
        // One more level must not be affordable
        assert!(buy_upgrade(&mut s, "hydrogen", 1).is_err());
    }
}
