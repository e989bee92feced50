//! Reward grants: level-up rewards, rewarded-ad grants, and the gem shop.
//!
//! The ad and billing SDKs live outside this crate; what lives here is the
//! logic their completion callbacks feed into, with the validation that
//! gates each grant.

pub mod ads;
pub mod levels;
pub mod shop;

pub use ads::{grant_ad_reward, AdGrant, AdRewardKind};
pub use levels::{claim_pending_level_rewards, ClaimedLevelReward, LEVEL_REWARDS};
pub use shop::{complete_purchase, ProductDef, PurchaseGrant, PRODUCTS};
