//! Integration tests for the checkout upsell against the bistro fixture menu.
//!
//! Recommendations are randomized, so most assertions hold across many seeds. Where the menu
//! leaves only one popular candidate for a slot, the exact pick is asserted.

use rand::{SeedableRng, rngs::StdRng};
use rustc_hash::FxHashSet;
use testresult::TestResult;

use carte::{
    fixtures::Fixture,
    menu::{Category, Diet, ItemId},
    recommend::{balance::allocate_slots, predict_checkout_upsell},
};

const SEEDS: u64 = 200;

fn ids(upsell: &[ItemId]) -> Vec<&str> {
    upsell.iter().map(ItemId::as_str).collect()
}

#[test]
fn upsell_holds_its_invariants_for_every_seed() -> TestResult {
    let fixture = Fixture::from_set("bistro")?;
    let catalog = fixture.catalog()?;
    let cart = fixture.cart()?;

    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let upsell = predict_checkout_upsell(catalog, cart, Diet::Veg, &mut rng);
        let unique: FxHashSet<&ItemId> = upsell.iter().collect();

        assert!(upsell.len() <= 5, "seed {seed}: {upsell:?}");
        assert_eq!(unique.len(), upsell.len(), "seed {seed}: duplicate in {upsell:?}");

        for id in &upsell {
            let item = catalog.get(id.as_str()).ok_or("unknown item recommended")?;

            assert!(!cart.contains(id.as_str()), "seed {seed}: {id} already in cart");
            assert!(item.is_offerable(), "seed {seed}: {id} cannot be offered");
            assert_eq!(item.diet(), Diet::Veg, "seed {seed}: {id} is not vegetarian");
        }
    }

    Ok(())
}

#[test]
fn two_soups_for_two_sends_slots_to_starters_and_mains() -> TestResult {
    let fixture = Fixture::from_set("bistro")?;
    let catalog = fixture.catalog()?;
    let cart = fixture.cart()?;

    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let counts = allocate_slots(cart, 3, &mut rng);

        assert_eq!(
            (counts.soups_and_salads, counts.starters, counts.main_course),
            (0, 2, 1),
            "seed {seed}"
        );

        let upsell = predict_checkout_upsell(catalog, cart, Diet::Veg, &mut rng);
        let upsell = ids(&upsell);

        // Only one popular dessert and one popular beverage remain outside the cart.
        assert_eq!(upsell.get(..2), Some(["bv_002", "ds_001"].as_slice()));

        let mut starters: Vec<&str> = upsell.get(2..).unwrap_or_default().to_vec();
        starters.retain(|id| id.starts_with("st_"));
        starters.sort_unstable();

        assert_eq!(starters, ["st_001", "st_002"], "seed {seed}");
        assert!(
            upsell.contains(&"mc_001") ^ upsell.contains(&"mc_002"),
            "seed {seed}: expected exactly one popular main in {upsell:?}"
        );
    }

    Ok(())
}

#[test]
fn cart_with_every_veg_dessert_gets_two_beverages() -> TestResult {
    let mut fixture = Fixture::from_set("bistro")?;
    fixture.load_cart("dessert_course")?;

    let catalog = fixture.catalog()?;
    let cart = fixture.cart()?;

    assert_eq!(cart.quantity_in(Category::Desserts), 3);

    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let upsell = predict_checkout_upsell(catalog, cart, Diet::Veg, &mut rng);
        let upsell = ids(&upsell);

        assert_eq!(upsell.get(..2), Some(["bv_001", "bv_002"].as_slice()), "seed {seed}");

        // Targets [3, 4, 3] against [0, 2, 3]: two soups & salads, then a starter.
        let mut soups: Vec<&str> = upsell.get(2..4).unwrap_or_default().to_vec();
        soups.sort_unstable();

        assert_eq!(soups, ["ss_001", "ss_002"], "seed {seed}");
        assert_eq!(upsell.get(4), Some(&"st_002"), "seed {seed}");
    }

    Ok(())
}

#[test]
fn non_vegetarian_diner_sees_meat_and_shared_sweets() -> TestResult {
    let mut fixture = Fixture::from_set("bistro")?;
    fixture.load_cart("empty")?;

    let catalog = fixture.catalog()?;
    let cart = fixture.cart()?;

    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let upsell = predict_checkout_upsell(catalog, cart, Diet::NonVeg, &mut rng);

        assert_eq!(upsell.len(), 5, "seed {seed}: {upsell:?}");

        for id in &upsell {
            let item = catalog.get(id.as_str()).ok_or("unknown item recommended")?;

            assert!(
                item.diet() == Diet::NonVeg
                    || matches!(item.category(), Category::Desserts | Category::Beverages),
                "seed {seed}: {id} does not suit a non-vegetarian diner"
            );
        }

        let courses: FxHashSet<&str> = ids(&upsell).into_iter().skip(2).collect();

        assert_eq!(
            courses,
            FxHashSet::from_iter(["ss_003", "st_005", "mc_005"]),
            "seed {seed}"
        );
    }

    Ok(())
}
