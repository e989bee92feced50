//! Astromine - Headless Idle Mining Clicker Engine
//!
//! Tap the asteroid, build extractors, hire managers, collect artifacts,
//! climb the tech tree, and prestige the claim for essence. This crate is
//! the full game engine and balance model; presentation shells drive it
//! through [`GameState`], the operation functions, and [`game_tick`].

pub mod achievements;
pub mod artifacts;
pub mod boosts;
pub mod core;
pub mod error;
pub mod inventory;
pub mod managers;
pub mod rewards;
pub mod save_manager;
pub mod simulator;
pub mod techtree;
pub mod upgrades;

pub use crate::core::constants::TICK_INTERVAL_MS;
pub use crate::core::game_state::GameState;
pub use crate::core::tick::{game_tick, TickEvent, TickResult};
pub use crate::error::GameError;
pub use crate::save_manager::SaveManager;
