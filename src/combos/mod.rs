//! Landing-page combos
//!
//! Resolves the fixed [`LANDING_TEMPLATES`] against a diet-filtered, shuffled menu and prices
//! each resulting combo with a tier-weighted discount.

use rustc_hash::{FxHashMap, FxHashSet};
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::{
    catalog::Catalog,
    filters::{eligible_for_diet, in_category},
    menu::{Diet, FlavorTier, ItemId, MenuItem},
    pricing::{self, MaxDiscount, PricingError},
    random::RandomSource,
    selector::{POPULAR_TIERS, select},
};

pub mod templates;

pub use templates::{ComboTemplate, FALLBACK_CHAIN, LANDING_TEMPLATES, SlotSpec};

/// Diets the landing page builds combos for by default.
pub const LANDING_DIETS: [Diet; 1] = [Diet::Veg];

/// A priced combo. Slots that could not be filled are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboOffer<'a> {
    item_ids: SmallVec<[Option<ItemId>; 4]>,
    discount: Money<'a, Currency>,
    total: Money<'a, Currency>,
}

impl<'a> ComboOffer<'a> {
    /// Item ids in template slot order.
    pub fn item_ids(&self) -> &[Option<ItemId>] {
        &self.item_ids
    }

    /// Discount on the combo, in whole major currency units.
    pub fn discount(&self) -> &Money<'a, Currency> {
        &self.discount
    }

    /// Undiscounted total of the resolved items.
    pub fn total(&self) -> &Money<'a, Currency> {
        &self.total
    }
}

/// Tier groups a generic slot walks, most popular first.
const GENERIC_TIER_GROUPS: [&[FlavorTier]; 3] = [
    &POPULAR_TIERS,
    &[FlavorTier::Puzzles],
    &[FlavorTier::Dogs, FlavorTier::Unranked],
];

/// Candidate pool shared by every combo built in one call.
struct ComboPool<'c, 'a> {
    shuffled: Vec<&'c MenuItem<'a>>,
    used: FxHashSet<&'c ItemId>,
}

impl<'c, 'a> ComboPool<'c, 'a> {
    fn resolve<R>(&mut self, slot: SlotSpec, rng: &mut R) -> Option<&'c MenuItem<'a>>
    where
        R: RandomSource + ?Sized,
    {
        let picked = match slot {
            SlotSpec::Ranked(..) => self.resolve_ranked(slot),
            SlotSpec::AnyBeverage | SlotSpec::AnyDessert => self.resolve_generic(slot, rng),
        };

        match picked {
            Some(item) => {
                self.used.insert(item.id());
            }
            None => warn!(%slot, "no item left for combo slot"),
        }

        picked
    }

    /// First item of the slot's category, walking its tier order over unused items, then over
    /// every item of the category, including ones already placed in this combo.
    fn resolve_ranked(&self, slot: SlotSpec) -> Option<&'c MenuItem<'a>> {
        let category = slot.category();
        let find = |tier, allow_used: bool| {
            self.shuffled.iter().copied().find(|item| {
                item.category() == category
                    && item.tier() == tier
                    && (allow_used || !self.used.contains(item.id()))
            })
        };

        slot.tier_order()
            .find_map(|tier| find(tier, false))
            .or_else(|| {
                debug!(%slot, "every candidate already used; allowing repeats");

                slot.tier_order().find_map(|tier| find(tier, true))
            })
    }

    /// A random item of the slot's category from the most popular tier group that has one,
    /// preferring unused items within each group.
    fn resolve_generic<R>(&self, slot: SlotSpec, rng: &mut R) -> Option<&'c MenuItem<'a>>
    where
        R: RandomSource + ?Sized,
    {
        let pool = in_category(&self.shuffled, slot.category());

        GENERIC_TIER_GROUPS.iter().find_map(|tiers| {
            let group: Vec<&'c MenuItem<'a>> = pool
                .iter()
                .copied()
                .filter(|item| tiers.contains(&item.tier()))
                .collect();
            let unused: Vec<&'c MenuItem<'a>> = group
                .iter()
                .copied()
                .filter(|item| !self.used.contains(item.id()))
                .collect();

            let candidates = if unused.is_empty() { &group } else { &unused };

            select(candidates, 1, tiers, &mut *rng).first().copied()
        })
    }
}

/// Builds the six landing-page combos for one diet.
///
/// The eligible menu is shuffled once and shared by all six combos, which avoid repeating an
/// item across combos while they can.
///
/// # Errors
///
/// Returns a [`PricingError`] if a combo cannot be priced in the catalog currency.
pub fn build_combos<'a, R>(
    catalog: &Catalog<'a>,
    diet: Diet,
    max_discount: MaxDiscount,
    rng: &mut R,
) -> Result<Vec<ComboOffer<'a>>, PricingError>
where
    R: RandomSource + ?Sized,
{
    let mut shuffled = eligible_for_diet(catalog.iter(), diet);
    rng.shuffle(&mut shuffled);

    debug!(%diet, candidates = shuffled.len(), "building landing combos");

    let mut pool = ComboPool {
        shuffled,
        used: FxHashSet::default(),
    };

    LANDING_TEMPLATES
        .iter()
        .map(|template| -> Result<ComboOffer<'a>, PricingError> {
            let resolved: SmallVec<[Option<&MenuItem<'a>>; 4]> = template
                .slots()
                .iter()
                .map(|slot| pool.resolve(*slot, rng))
                .collect();

            let items = resolved.iter().flatten().copied();

            Ok(ComboOffer {
                item_ids: resolved
                    .iter()
                    .map(|item| item.map(|item| item.id().clone()))
                    .collect(),
                discount: pricing::discount(items.clone(), max_discount, catalog.currency())?,
                total: pricing::total(items, catalog.currency())?,
            })
        })
        .collect()
}

/// Builds landing-page combos for each of [`LANDING_DIETS`].
///
/// # Errors
///
/// Returns a [`PricingError`] if a combo cannot be priced.
pub fn predict_landing_combos<'a, R>(
    catalog: &Catalog<'a>,
    max_discount: MaxDiscount,
    rng: &mut R,
) -> Result<FxHashMap<Diet, Vec<ComboOffer<'a>>>, PricingError>
where
    R: RandomSource + ?Sized,
{
    predict_landing_combos_with(catalog, &LANDING_DIETS, max_discount, rng)
}

/// Builds landing-page combos for each of `diets`.
///
/// Each diet gets its own shuffle and its own set of used items.
///
/// # Errors
///
/// Returns a [`PricingError`] if a combo cannot be priced.
pub fn predict_landing_combos_with<'a, R>(
    catalog: &Catalog<'a>,
    diets: &[Diet],
    max_discount: MaxDiscount,
    rng: &mut R,
) -> Result<FxHashMap<Diet, Vec<ComboOffer<'a>>>, PricingError>
where
    R: RandomSource + ?Sized,
{
    diets
        .iter()
        .map(|diet| build_combos(catalog, *diet, max_discount, rng).map(|combos| (*diet, combos)))
        .collect()
}
