//! Checkout upsell
//!
//! Builds the short list of items suggested on the checkout screen: a dessert and beverage
//! pairing followed by popular items that balance the table's savoury courses.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{
    cart::Cart,
    catalog::Catalog,
    filters::{eligible_for_diet, excluding_cart},
    menu::{Diet, ItemId, MenuItem},
    random::RandomSource,
};

pub mod balance;
pub mod pairing;

pub use balance::DEFAULT_COURSE_SLOTS;

/// Predicts the checkout upsell list with [`DEFAULT_COURSE_SLOTS`] balanced-course slots.
///
/// See [`predict_checkout_upsell_with`].
pub fn predict_checkout_upsell<R>(
    catalog: &Catalog<'_>,
    cart: &Cart,
    diet: Diet,
    rng: &mut R,
) -> Vec<ItemId>
where
    R: RandomSource + ?Sized,
{
    predict_checkout_upsell_with(catalog, cart, diet, DEFAULT_COURSE_SLOTS, rng)
}

/// Predicts the checkout upsell list.
///
/// The dessert and beverage pairing comes first, then up to `course_slots` items spread
/// across soups & salads, starters and main courses. The result never contains an item that
/// is already in the cart, nor the same item twice, and may be shorter than `course_slots + 2`
/// when the menu runs dry.
pub fn predict_checkout_upsell_with<R>(
    catalog: &Catalog<'_>,
    cart: &Cart,
    diet: Diet,
    course_slots: usize,
    rng: &mut R,
) -> Vec<ItemId>
where
    R: RandomSource + ?Sized,
{
    let diet_universe = eligible_for_diet(catalog.iter(), diet);
    let cart_universe = excluding_cart(&diet_universe, cart);

    debug!(
        %diet,
        eligible = diet_universe.len(),
        outside_cart = cart_universe.len(),
        "predicting checkout upsell"
    );

    let paired = pairing::pair_dessert_and_beverages(&diet_universe, &cart_universe, rng);
    let balanced = balance::balance_courses(cart, &cart_universe, course_slots, rng);

    let mut seen: FxHashSet<&ItemId> = FxHashSet::default();

    paired
        .into_iter()
        .chain(balanced)
        .map(MenuItem::id)
        .filter(|id| !cart.contains(id.as_str()) && seen.insert(*id))
        .cloned()
        .collect()
}
