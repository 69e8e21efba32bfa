//! Carte prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogError, MenuItemKey},
    combos::{ComboOffer, build_combos, predict_landing_combos, predict_landing_combos_with},
    menu::{Category, Diet, FlavorTier, ItemId, MenuItem},
    pricing::{MaxDiscount, PricingError},
    random::{Ordered, RandomSource},
    recommend::{predict_checkout_upsell, predict_checkout_upsell_with},
    verify::{OrderLine, OrderSource, OrderedItem, verify_order_lines},
};
