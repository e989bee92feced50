//! Stackable supply items, some of which activate boosts when used.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{get_item, ITEMS};
pub use logic::{add_item, buy_item, use_item};
pub use types::{ItemDef, ItemEffect, ItemStack};
