//! Dessert and beverage pairing
//!
//! Rounds off the meal: one dessert and one drink when there is a dessert left to suggest,
//! otherwise two drinks.

use smallvec::SmallVec;
use tracing::debug;

use crate::{
    filters::in_category,
    menu::{Category, MenuItem},
    random::RandomSource,
    selector::{POPULAR_TIERS, select},
};

/// Picks a dessert-and-beverage pair, or two beverages.
///
/// `diet_universe` is every offerable item suiting the diner's diet; `cart_universe` is the same
/// set minus the items already in the cart.
///
/// - If any dessert is left in `cart_universe`: one beverage and one dessert, beverage first.
///   The beverage comes from the cart universe, or from the diet universe when the cart
///   universe has none.
/// - Otherwise two beverages: both from the cart universe when it has two or more; its only
///   beverage plus one other from the diet universe when it has exactly one; else both from
///   the diet universe.
///
/// Slots that cannot be filled are left out rather than padded.
pub fn pair_dessert_and_beverages<'c, 'a, R>(
    diet_universe: &[&'c MenuItem<'a>],
    cart_universe: &[&'c MenuItem<'a>],
    rng: &mut R,
) -> SmallVec<[&'c MenuItem<'a>; 2]>
where
    R: RandomSource + ?Sized,
{
    let desserts = in_category(cart_universe, Category::Desserts);
    let beverages = in_category(cart_universe, Category::Beverages);

    if !desserts.is_empty() {
        let dessert = select(&desserts, 1, &POPULAR_TIERS, rng).first().copied();

        let beverage = if beverages.is_empty() {
            debug!("no beverage left outside the cart; drawing from the full diet menu");

            let all_beverages = in_category(diet_universe, Category::Beverages);
            select(&all_beverages, 1, &POPULAR_TIERS, rng).first().copied()
        } else {
            select(&beverages, 1, &POPULAR_TIERS, rng).first().copied()
        };

        return beverage.into_iter().chain(dessert).collect();
    }

    match beverages.as_slice() {
        [] => {
            let all_beverages = in_category(diet_universe, Category::Beverages);

            select(&all_beverages, 2, &POPULAR_TIERS, rng)
                .into_iter()
                .collect()
        }
        [only] => {
            let others: Vec<&MenuItem<'a>> = in_category(diet_universe, Category::Beverages)
                .into_iter()
                .filter(|item| item.id() != only.id())
                .collect();

            let mut picked: SmallVec<[&'c MenuItem<'a>; 2]> = SmallVec::new();
            picked.push(*only);
            picked.extend(select(&others, 1, &POPULAR_TIERS, rng));
            picked
        }
        _ => select(&beverages, 2, &POPULAR_TIERS, rng)
            .into_iter()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use rusty_money::{Money, iso::INR};

    use crate::{
        menu::{Diet, FlavorTier},
        random::Ordered,
    };

    use super::*;

    fn item<'a>(id: &str, category: Category, tier: FlavorTier) -> MenuItem<'a> {
        MenuItem::new(id, category, Diet::Veg, tier, Money::from_minor(15_000, INR))
    }

    fn ids(items: &[&MenuItem<'_>]) -> Vec<String> {
        items.iter().map(|i| i.id().to_string()).collect()
    }

    #[test]
    fn single_dessert_pairs_with_horses_beverage() {
        let menu = [
            item("kulfi", Category::Desserts, FlavorTier::Stars),
            item("soda", Category::Beverages, FlavorTier::Unranked),
            item("lassi", Category::Beverages, FlavorTier::Horses),
        ];
        let universe: Vec<_> = menu.iter().collect();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..20 {
            let picked = pair_dessert_and_beverages(&universe, &universe, &mut rng);

            assert_eq!(ids(&picked), ["lassi", "kulfi"]);
        }
    }

    #[test]
    fn dessert_with_no_cart_beverage_falls_back_to_diet_menu() {
        let menu = [
            item("kulfi", Category::Desserts, FlavorTier::Horses),
            item("lassi", Category::Beverages, FlavorTier::Stars),
        ];
        let diet_universe: Vec<_> = menu.iter().collect();
        let cart_universe: Vec<_> = diet_universe
            .iter()
            .copied()
            .filter(|i| i.category() == Category::Desserts)
            .collect();

        let picked = pair_dessert_and_beverages(&diet_universe, &cart_universe, &mut Ordered);

        assert_eq!(ids(&picked), ["lassi", "kulfi"]);
    }

    #[test]
    fn no_dessert_recommends_two_beverages_from_cart_universe() {
        let menu = [
            item("chai", Category::Beverages, FlavorTier::Dogs),
            item("lassi", Category::Beverages, FlavorTier::Horses),
            item("soda", Category::Beverages, FlavorTier::Stars),
        ];
        let universe: Vec<_> = menu.iter().collect();

        let picked = pair_dessert_and_beverages(&universe, &universe, &mut Ordered);

        assert_eq!(ids(&picked), ["lassi", "soda"]);
    }

    #[test]
    fn single_cart_beverage_is_topped_up_from_diet_menu() {
        let menu = [
            item("chai", Category::Beverages, FlavorTier::Dogs),
            item("lassi", Category::Beverages, FlavorTier::Horses),
        ];
        let diet_universe: Vec<_> = menu.iter().collect();
        let cart_universe: Vec<_> = diet_universe
            .iter()
            .copied()
            .filter(|i| i.id().as_str() == "chai")
            .collect();

        let picked = pair_dessert_and_beverages(&diet_universe, &cart_universe, &mut Ordered);

        assert_eq!(ids(&picked), ["chai", "lassi"]);
    }

    #[test]
    fn empty_cart_universe_draws_both_beverages_from_diet_menu() {
        let menu = [
            item("chai", Category::Beverages, FlavorTier::Dogs),
            item("lassi", Category::Beverages, FlavorTier::Horses),
        ];
        let diet_universe: Vec<_> = menu.iter().collect();

        let picked = pair_dessert_and_beverages(&diet_universe, &[], &mut Ordered);

        assert_eq!(ids(&picked), ["lassi", "chai"]);
    }

    #[test]
    fn missing_beverages_shrink_the_result() {
        let menu = [item("kulfi", Category::Desserts, FlavorTier::Puzzles)];
        let universe: Vec<_> = menu.iter().collect();

        let picked = pair_dessert_and_beverages(&universe, &universe, &mut Ordered);

        assert_eq!(ids(&picked), ["kulfi"]);
        assert!(pair_dessert_and_beverages(&[], &[], &mut Ordered).is_empty());
    }
}
