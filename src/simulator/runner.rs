//! Simulation runner: drives the real game engine with a greedy strategy.

use super::config::SimConfig;
use super::report::SimReport;
use crate::achievements::types::Achievements;
use crate::artifacts::data::ARTIFACTS;
use crate::artifacts::logic::buy_artifact;
use crate::core::constants::TICKS_PER_SECOND;
use crate::core::game_logic::{income_per_second, tap};
use crate::core::game_state::GameState;
use crate::core::prestige::{can_prestige, perform_prestige};
use crate::core::tick::game_tick;
use crate::managers::data::MANAGERS;
use crate::managers::logic::hire_manager;
use crate::techtree::data::TECH_TREE;
use crate::techtree::logic::{unlock_tech, validate_tech_table};
use crate::upgrades::data::UPGRADES;
use crate::upgrades::logic::{buy_upgrade, next_cost};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

/// Stats collected from a single simulated session.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub reached_target: bool,
    pub total_ticks: u64,
    pub ticks_to_first_prestige: Option<u64>,
    pub prestiges: u32,
    pub final_level: u32,
    pub final_income: f64,
    pub total_essence: u64,
    pub lifetime_coins: f64,
    pub upgrades_bought: u64,
    pub managers_hired: u32,
    pub taps: u64,
}

/// Run the configured number of sessions and aggregate a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    // A broken static table would quietly skew every run.
    validate_tech_table().expect("tech table invalid");

    let base_seed = config
        .seed
        .unwrap_or_else(|| rand::thread_rng().gen());

    let mut runs = Vec::with_capacity(config.num_runs as usize);
    for i in 0..config.num_runs {
        let stats = run_once(config, base_seed.wrapping_add(i as u64));
        if config.verbosity >= 2 {
            debug!(run = i, prestiges = stats.prestiges, "run finished");
        }
        runs.push(stats);
    }
    SimReport::from_runs(runs, config)
}

fn run_once(config: &SimConfig, seed: u64) -> RunStats {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut state = GameState::new(0);
    let mut achievements = Achievements::default();
    let mut tick_counter = 0u32;

    let mut upgrades_bought = 0u64;
    let mut ticks_to_first_prestige = None;
    let mut tick: u64 = 0;

    while tick < config.max_ticks_per_run {
        game_tick(&mut state, &mut tick_counter, &mut achievements, &mut rng);
        tick += 1;

        // A steady drumbeat of taps
        if tick % TICKS_PER_SECOND as u64 == 0 {
            for _ in 0..config.taps_per_second {
                tap(&mut state, &mut rng);
            }
        }

        if tick % config.buy_interval_ticks == 0 {
            upgrades_bought += auto_buy(&mut state);
            auto_hire(&mut state);
            auto_research(&mut state);
        }

        if can_prestige(&state) && perform_prestige(&mut state).is_ok() {
            ticks_to_first_prestige.get_or_insert(tick);
            auto_collect_artifacts(&mut state);
            if state.prestige_count >= config.target_prestiges {
                break;
            }
        }
    }

    RunStats {
        reached_target: state.prestige_count >= config.target_prestiges,
        total_ticks: tick,
        ticks_to_first_prestige,
        prestiges: state.prestige_count,
        final_level: state.player_level,
        final_income: income_per_second(&state),
        total_essence: state.total_essence_earned,
        lifetime_coins: state.total_coins_earned,
        upgrades_bought,
        managers_hired: state.hired_managers.len() as u32,
        taps: state.total_taps,
    }
}

/// Repeatedly buy the affordable level with the best income per coin.
fn auto_buy(state: &mut GameState) -> u64 {
    let mut bought = 0;
    for _ in 0..25 {
        let mut best: Option<(&str, f64)> = None;
        for def in &UPGRADES {
            if state.total_coins_earned < def.unlock_at {
                continue;
            }
            let cost = match next_cost(state, def.id) {
                Ok(c) => c,
                Err(_) => continue,
            };
            if cost > state.coins {
                continue;
            }
            let value = def.base_income / cost;
            if best.map_or(true, |(_, v)| value > v) {
                best = Some((def.id, value));
            }
        }
        match best {
            Some((id, _)) if buy_upgrade(state, id, 1).is_ok() => bought += 1,
            _ => break,
        }
    }
    bought
}

/// Hire every affordable manager; cheap ones pay for themselves fast.
fn auto_hire(state: &mut GameState) {
    for def in &MANAGERS {
        if !state.has_manager(def.id)
            && state.upgrade_level(def.element) > 0
            && state.coins >= def.hire_cost
        {
            let _ = hire_manager(state, def.id);
        }
    }
}

/// Spend skill points down the tree in definition order.
fn auto_research(state: &mut GameState) {
    for def in &TECH_TREE {
        if !state.has_tech(def.id) {
            let _ = unlock_tech(state, def.id);
        }
    }
}

/// After a prestige, convert essence into whatever artifacts it affords.
fn auto_collect_artifacts(state: &mut GameState) {
    for def in &ARTIFACTS {
        if !state.has_artifact(def.id) {
            let _ = buy_artifact(state, def.id);
        }
    }
}
