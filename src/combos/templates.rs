//! Combo templates

use std::fmt;

use crate::menu::{Category, FlavorTier};

/// Order in which flavor tiers are relaxed when a ranked slot's preferred tier is unavailable.
pub const FALLBACK_CHAIN: [FlavorTier; 4] = [
    FlavorTier::Dogs,
    FlavorTier::Horses,
    FlavorTier::Puzzles,
    FlavorTier::Stars,
];

/// One position in a combo template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSpec {
    /// An item of the category, preferring the given tier and relaxing along [`FALLBACK_CHAIN`].
    Ranked(Category, FlavorTier),

    /// Any popular beverage.
    AnyBeverage,

    /// Any popular dessert.
    AnyDessert,
}

impl SlotSpec {
    /// Category the slot draws from.
    pub fn category(self) -> Category {
        match self {
            SlotSpec::Ranked(category, _) => category,
            SlotSpec::AnyBeverage => Category::Beverages,
            SlotSpec::AnyDessert => Category::Desserts,
        }
    }

    /// Tiers to try for a ranked slot: the preferred tier, then the rest of the chain.
    ///
    /// Empty for generic slots.
    pub fn tier_order(self) -> impl Iterator<Item = FlavorTier> {
        let preferred = match self {
            SlotSpec::Ranked(_, tier) => Some(tier),
            SlotSpec::AnyBeverage | SlotSpec::AnyDessert => None,
        };

        preferred.into_iter().chain(
            FALLBACK_CHAIN
                .into_iter()
                .filter(move |tier| preferred.is_some_and(|preferred| preferred != *tier)),
        )
    }
}

impl fmt::Display for SlotSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotSpec::Ranked(category, tier) => write!(f, "{category}/{tier}"),
            SlotSpec::AnyBeverage => f.write_str("any beverage"),
            SlotSpec::AnyDessert => f.write_str("any dessert"),
        }
    }
}

/// A fixed combo layout of two to four slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComboTemplate {
    slots: &'static [SlotSpec],
}

impl ComboTemplate {
    /// Slots in display order.
    pub fn slots(&self) -> &'static [SlotSpec] {
        self.slots
    }
}

/// The six landing-page combos, in display order.
pub const LANDING_TEMPLATES: [ComboTemplate; 6] = [
    ComboTemplate {
        slots: &[
            SlotSpec::Ranked(Category::Starters, FlavorTier::Horses),
            SlotSpec::Ranked(Category::Starters, FlavorTier::Puzzles),
            SlotSpec::AnyBeverage,
        ],
    },
    ComboTemplate {
        slots: &[
            SlotSpec::Ranked(Category::Starters, FlavorTier::Horses),
            SlotSpec::Ranked(Category::Starters, FlavorTier::Dogs),
            SlotSpec::AnyBeverage,
        ],
    },
    ComboTemplate {
        slots: &[
            SlotSpec::Ranked(Category::MainCourse, FlavorTier::Horses),
            SlotSpec::Ranked(Category::Starters, FlavorTier::Puzzles),
            SlotSpec::AnyBeverage,
        ],
    },
    ComboTemplate {
        slots: &[
            SlotSpec::Ranked(Category::MainCourse, FlavorTier::Horses),
            SlotSpec::Ranked(Category::Starters, FlavorTier::Dogs),
            SlotSpec::AnyBeverage,
        ],
    },
    ComboTemplate {
        slots: &[
            SlotSpec::Ranked(Category::MainCourse, FlavorTier::Horses),
            SlotSpec::Ranked(Category::MainCourse, FlavorTier::Puzzles),
            SlotSpec::AnyDessert,
            SlotSpec::AnyBeverage,
        ],
    },
    ComboTemplate {
        slots: &[
            SlotSpec::Ranked(Category::MainCourse, FlavorTier::Horses),
            SlotSpec::Ranked(Category::MainCourse, FlavorTier::Dogs),
            SlotSpec::AnyDessert,
            SlotSpec::AnyBeverage,
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_slot_tries_preferred_tier_first_without_repeating_it() {
        let order: Vec<FlavorTier> = SlotSpec::Ranked(Category::Starters, FlavorTier::Puzzles)
            .tier_order()
            .collect();

        assert_eq!(
            order,
            [
                FlavorTier::Puzzles,
                FlavorTier::Dogs,
                FlavorTier::Horses,
                FlavorTier::Stars
            ]
        );
    }

    #[test]
    fn generic_slots_have_no_tier_order() {
        assert_eq!(SlotSpec::AnyBeverage.tier_order().count(), 0);
        assert_eq!(SlotSpec::AnyDessert.category(), Category::Desserts);
    }

    #[test]
    fn every_template_has_two_to_four_slots() {
        for template in LANDING_TEMPLATES {
            assert!((2..=4).contains(&template.slots().len()));
        }
    }
}
