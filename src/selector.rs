//! Priority-tier selector
//!
//! The shared primitive behind every recommendation: pick up to `count` distinct items from a
//! candidate list, preferring flavor tiers in a given order and falling back to whatever is
//! left when the preferred tiers run dry.

use smallvec::SmallVec;

use crate::{
    menu::{FlavorTier, MenuItem},
    random::RandomSource,
};

/// Tier preference used for beverage and dessert picks.
pub const POPULAR_TIERS: [FlavorTier; 2] = [FlavorTier::Horses, FlavorTier::Stars];

/// Selects up to `count` distinct candidates.
///
/// The candidates are shuffled, then scanned once per tier in `tiers`, collecting unselected
/// items of that tier. If that still leaves the selection short, a final pass takes any
/// remaining candidates in shuffled order. The result is shorter than `count` only when there
/// are fewer than `count` candidates.
pub fn select<'c, 'a, R>(
    candidates: &[&'c MenuItem<'a>],
    count: usize,
    tiers: &[FlavorTier],
    rng: &mut R,
) -> SmallVec<[&'c MenuItem<'a>; 4]>
where
    R: RandomSource + ?Sized,
{
    let mut selected = SmallVec::new();

    if count == 0 {
        return selected;
    }

    let mut shuffled: SmallVec<[&'c MenuItem<'a>; 16]> = candidates.iter().copied().collect();
    let mut taken: SmallVec<[bool; 16]> = SmallVec::from_elem(false, shuffled.len());

    rng.shuffle(&mut shuffled);

    let passes = tiers.iter().map(Some).chain([None]);

    for tier in passes {
        for (item, is_taken) in shuffled.iter().zip(taken.iter_mut()) {
            if *is_taken || tier.is_some_and(|tier| item.tier() != *tier) {
                continue;
            }

            *is_taken = true;
            selected.push(*item);

            if selected.len() == count {
                return selected;
            }
        }
    }

    selected
}
