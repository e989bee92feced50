//! Achievement system module.
//!
//! Provides a global achievement registry that tracks progress across all
//! profiles and prestiges. Achievements are stored in
//! `~/.astromine/achievements.json`.

pub mod data;
pub mod persistence;
pub mod types;

pub use data::{get_achievement_def, get_achievements_by_category};
pub use persistence::{load_achievements, save_achievements};
pub use types::{AchievementCategory, AchievementId, Achievements, Requirement};
