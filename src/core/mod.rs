//! Core game engine: state, formulas, tick orchestration, prestige and
//! offline progression.

pub mod balance;
pub mod constants;
pub mod game_logic;
pub mod game_state;
pub mod offline;
pub mod prestige;
pub mod tick;

pub use game_state::GameState;
pub use tick::{game_tick, TickEvent, TickResult};
