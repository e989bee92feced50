//! Artifacts: relics bought with essence or gems that grant permanent perks.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{get_artifact, ARTIFACTS};
pub use logic::buy_artifact;
pub use types::{ArtifactCost, ArtifactDef, Perk};
