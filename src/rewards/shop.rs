//! Gem-package products granted on purchase completion.
//!
//! The billing plugin reports a product id when a purchase settles; the
//! shell forwards it to [`complete_purchase`]. Unknown ids are rejected so
//! a bad receipt can never mint currency.

use crate::boosts::logic::activate_boost;
use crate::boosts::types::{BoostEffect, BoostSource};
use crate::core::game_state::GameState;
use crate::error::GameError;
use tracing::info;

/// What a store product grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseGrant {
    Gems(u64),
    /// Permanent x2 passive income, once per profile.
    PermanentIncomeDoubler,
}

/// Static store catalogue, keyed by the billing product id.
#[derive(Debug, Clone, Copy)]
pub struct ProductDef {
    pub product_id: &'static str,
    pub name: &'static str,
    pub grant: PurchaseGrant,
}

pub const PRODUCTS: [ProductDef; 6] = [
    ProductDef {
        product_id: "astromine.gems.pouch",
        name: "Pouch of Gems",
        grant: PurchaseGrant::Gems(50),
    },
    ProductDef {
        product_id: "astromine.gems.crate",
        name: "Crate of Gems",
        grant: PurchaseGrant::Gems(160),
    },
    ProductDef {
        product_id: "astromine.gems.hold",
        name: "Cargo Hold of Gems",
        grant: PurchaseGrant::Gems(450),
    },
    ProductDef {
        product_id: "astromine.gems.freighter",
        name: "Freighter of Gems",
        grant: PurchaseGrant::Gems(1_200),
    },
    ProductDef {
        product_id: "astromine.gems.moon",
        name: "A Small Moon of Gems",
        grant: PurchaseGrant::Gems(3_500),
    },
    ProductDef {
        product_id: "astromine.doubler",
        name: "Permanent Income Doubler",
        grant: PurchaseGrant::PermanentIncomeDoubler,
    },
];

/// Look up a product by its billing id.
pub fn get_product(product_id: &str) -> Option<&'static ProductDef> {
    PRODUCTS.iter().find(|p| p.product_id == product_id)
}

/// Apply a settled purchase to the profile.
pub fn complete_purchase(
    state: &mut GameState,
    product_id: &str,
    now: i64,
) -> Result<&'static ProductDef, GameError> {
    let def = get_product(product_id).ok_or_else(|| GameError::UnknownId {
        kind: "product",
        id: product_id.to_string(),
    })?;
    match def.grant {
        PurchaseGrant::Gems(amount) => {
            state.gems += amount;
        }
        PurchaseGrant::PermanentIncomeDoubler => {
            activate_boost(
                state,
                BoostEffect::IncomeRate,
                2.0,
                None,
                BoostSource::Purchase,
                now,
            )?;
        }
    }
    info!(product = def.product_id, "purchase applied");
    Ok(def)
}
