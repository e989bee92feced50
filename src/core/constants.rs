// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const TICKS_PER_SECOND: u32 = 10;
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;

// Tapping
pub const TAP_BASE_VALUE: f64 = 1.0;
/// Fraction of passive income/sec folded into each tap.
pub const TAP_INCOME_FRACTION: f64 = 0.05;
pub const LUCKY_TAP_CHANCE: f64 = 0.01;
pub const LUCKY_TAP_MULTIPLIER: f64 = 10.0;
/// Chance per tap to shake a supply cache (inventory item) loose.
pub const TAP_ITEM_FIND_CHANCE: f64 = 0.002;
/// Chance per tick of a passing salvage drone dropping a cache while idle.
pub const TICK_ITEM_FIND_CHANCE: f64 = 0.0005;

// Player level curve: total lifetime coins needed for a level.
// coins_for_level(n) = LEVEL_CURVE_BASE * n^LEVEL_CURVE_EXPONENT
pub const LEVEL_CURVE_BASE: f64 = 1_000.0;
pub const LEVEL_CURVE_EXPONENT: f64 = 2.2;

// Prestige and essence
// essence = floor(sqrt(total_coins_earned / ESSENCE_COIN_BASE) * gain_mult)
pub const ESSENCE_COIN_BASE: f64 = 1_000_000.0;
pub const PRESTIGE_MIN_LIFETIME_COINS: f64 = 1_000_000.0;
/// Permanent income bonus per essence point (+2%).
pub const ESSENCE_INCOME_BONUS: f64 = 0.02;

// Offline progression
pub const OFFLINE_MULTIPLIER: f64 = 0.25;
pub const MAX_OFFLINE_SECONDS: i64 = 7 * 24 * 60 * 60;

// Cost reduction can never cut prices below half.
pub const COST_REDUCTION_FLOOR: f64 = 0.5;

// Ad reward grants
pub const AD_COIN_WINDFALL_SECONDS: f64 = 120.0;
pub const AD_TAP_FRENZY_MULTIPLIER: f64 = 3.0;
pub const AD_TAP_FRENZY_SECONDS: f64 = 60.0;
pub const AD_INCOME_SURGE_MULTIPLIER: f64 = 2.0;
pub const AD_INCOME_SURGE_SECONDS: f64 = 300.0;
pub const AD_TIME_WARP_SECONDS: f64 = 2.0 * 60.0 * 60.0;
pub const AD_GEM_HANDFUL: u64 = 5;

// Save format
pub const SAVE_VERSION_MAGIC: u64 = 0x41_53_54_52_4F_4D_4E_31; // "ASTROMN1"

// Event buffering
pub const RECENT_EVENT_CAPACITY: usize = 10;
