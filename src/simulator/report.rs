//! Simulation report generation.

use super::config::SimConfig;
use super::runner::RunStats;
use serde::Serialize;
use std::collections::HashMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_reached_target: u32,
    pub runs_timed_out: u32,

    // Aggregated stats
    pub avg_ticks_to_first_prestige: f64,
    pub avg_final_level: f64,
    pub avg_final_income: f64,
    pub avg_prestiges: f64,
    pub avg_lifetime_coins: f64,
    pub avg_upgrades_bought: f64,
    pub avg_managers_hired: f64,

    // Distribution data
    pub prestige_distribution: HashMap<u32, u32>,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, config: &SimConfig) -> Self {
        let num_runs = runs.len() as u32;
        let denom = num_runs.max(1) as f64;
        let runs_reached_target = runs.iter().filter(|r| r.reached_target).count() as u32;
        let runs_timed_out = runs
            .iter()
            .filter(|r| !r.reached_target && r.total_ticks >= config.max_ticks_per_run)
            .count() as u32;

        let first_prestige: Vec<u64> =
            runs.iter().filter_map(|r| r.ticks_to_first_prestige).collect();
        let avg_ticks_to_first_prestige = if first_prestige.is_empty() {
            0.0
        } else {
            first_prestige.iter().map(|&t| t as f64).sum::<f64>() / first_prestige.len() as f64
        };

        let avg_final_level = runs.iter().map(|r| r.final_level as f64).sum::<f64>() / denom;
        let avg_final_income = runs.iter().map(|r| r.final_income).sum::<f64>() / denom;
        let avg_prestiges = runs.iter().map(|r| r.prestiges as f64).sum::<f64>() / denom;
        let avg_lifetime_coins = runs.iter().map(|r| r.lifetime_coins).sum::<f64>() / denom;
        let avg_upgrades_bought =
            runs.iter().map(|r| r.upgrades_bought as f64).sum::<f64>() / denom;
        let avg_managers_hired =
            runs.iter().map(|r| r.managers_hired as f64).sum::<f64>() / denom;

        let mut prestige_distribution = HashMap::new();
        for run in &runs {
            *prestige_distribution.entry(run.prestiges).or_insert(0) += 1;
        }

        Self {
            num_runs,
            runs_reached_target,
            runs_timed_out,
            avg_ticks_to_first_prestige,
            avg_final_level,
            avg_final_income,
            avg_prestiges,
            avg_lifetime_coins,
            avg_upgrades_bought,
            avg_managers_hired,
            prestige_distribution,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} reached target, {} timed out\n\n",
            self.num_runs, self.runs_reached_target, self.runs_timed_out
        ));

        report.push_str(&format!(
            "Avg time to first prestige: {:.1} min of play\n",
            self.avg_ticks_to_first_prestige / 600.0
        ));
        report.push_str(&format!("Avg prestiges:          {:.2}\n", self.avg_prestiges));
        report.push_str(&format!("Avg final level:        {:.1}\n", self.avg_final_level));
        report.push_str(&format!(
            "Avg final income:       {:.1} coins/sec\n",
            self.avg_final_income
        ));
        report.push_str(&format!(
            "Avg lifetime coins:     {:.3e}\n",
            self.avg_lifetime_coins
        ));
        report.push_str(&format!(
            "Avg extractor levels:   {:.1}\n",
            self.avg_upgrades_bought
        ));
        report.push_str(&format!(
            "Avg managers hired:     {:.1}\n\n",
            self.avg_managers_hired
        ));

        let mut counts: Vec<(&u32, &u32)> = self.prestige_distribution.iter().collect();
        counts.sort_by_key(|(p, _)| **p);
        report.push_str("Prestige distribution:\n");
        for (prestiges, count) in counts {
            report.push_str(&format!("  P{:<3} {:>4} runs\n", prestiges, count));
        }

        report
    }

    /// Serialize the aggregates and per-run stats as JSON.
    pub fn to_json(&self) -> String {
        #[derive(Serialize)]
        struct JsonReport<'a> {
            num_runs: u32,
            runs_reached_target: u32,
            runs_timed_out: u32,
            avg_ticks_to_first_prestige: f64,
            avg_final_level: f64,
            avg_final_income: f64,
            avg_prestiges: f64,
            avg_lifetime_coins: f64,
            avg_upgrades_bought: f64,
            avg_managers_hired: f64,
            runs: &'a [RunStats],
        }
        let json = JsonReport {
            num_runs: self.num_runs,
            runs_reached_target: self.runs_reached_target,
            runs_timed_out: self.runs_timed_out,
            avg_ticks_to_first_prestige: self.avg_ticks_to_first_prestige,
            avg_final_level: self.avg_final_level,
            avg_final_income: self.avg_final_income,
            avg_prestiges: self.avg_prestiges,
            avg_lifetime_coins: self.avg_lifetime_coins,
            avg_upgrades_bought: self.avg_upgrades_bought,
            avg_managers_hired: self.avg_managers_hired,
            runs: &self.run_stats,
        };
        serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string())
    }
}
