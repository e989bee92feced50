//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum ticks per run before timeout (10 ticks = 1 second)
    pub max_ticks_per_run: u64,

    /// Simulated taps per second of play
    pub taps_per_second: u32,

    /// Prestige count at which a run counts as complete
    pub target_prestiges: u32,

    /// How often (in ticks) the strategy goes shopping
    pub buy_interval_ticks: u64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_ticks_per_run: 1_000_000,
            taps_per_second: 4,
            target_prestiges: 1,
            buy_interval_ticks: 20,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a fast balance sanity check
    pub fn quick() -> Self {
        Self {
            num_runs: 10,
            max_ticks_per_run: 300_000,
            ..Default::default()
        }
    }

    /// Full config following several prestige cycles
    pub fn full_progression() -> Self {
        Self {
            num_runs: 25,
            max_ticks_per_run: 5_000_000,
            target_prestiges: 3,
            ..Default::default()
        }
    }
}
