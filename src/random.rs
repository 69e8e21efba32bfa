//! Random sources
//!
//! Every random decision the engine makes (shuffling candidates, breaking ties) goes through
//! [`RandomSource`], so callers can pass a seeded generator or a fully deterministic source.

use rand::Rng;

/// Source of uniform random choices.
pub trait RandomSource {
    /// Returns a uniformly distributed index in `0..len`.
    ///
    /// Callers never pass `len == 0`.
    fn index(&mut self, len: usize) -> usize;

    /// Shuffles `items` in place with a Fisher–Yates pass, so every permutation is equally
    /// likely when [`RandomSource::index`] is uniform.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for upper in (1..items.len()).rev() {
            let pick = self.index(upper + 1);

            items.swap(upper, pick);
        }
    }

    /// Picks one element uniformly, or `None` if `items` is empty.
    fn choose<'s, T>(&mut self, items: &'s [T]) -> Option<&'s T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.index(items.len()))
        }
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Deterministic source: every shuffle leaves its input order untouched and every tie is
/// broken in favour of the last candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ordered;

impl RandomSource for Ordered {
    fn index(&mut self, len: usize) -> usize {
        len.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use rustc_hash::FxHashSet;

    use super::*;

    #[test]
    fn ordered_shuffle_keeps_input_order() {
        let mut items = [1, 2, 3, 4, 5];

        Ordered.shuffle(&mut items);

        assert_eq!(items, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn ordered_choose_picks_last() {
        assert_eq!(Ordered.choose(&["a", "b", "c"]), Some(&"c"));
        assert_eq!(Ordered.choose::<u8>(&[]), None);
    }

    #[test]
    fn seeded_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items: Vec<u32> = (0..20).collect();

        rng.shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();

        assert_eq!(sorted, (0..20).collect::<Vec<u32>>());
    }

    #[test]
    fn shuffle_reaches_every_permutation_of_three() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = FxHashSet::default();

        for _ in 0..500 {
            let mut items = ['a', 'b', 'c'];

            rng.shuffle(&mut items);
            seen.insert(items);
        }

        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn shuffle_handles_short_slices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: [u8; 0] = [];
        let mut single = [9];

        rng.shuffle(&mut empty);
        rng.shuffle(&mut single);

        assert_eq!(single, [9]);
    }
}
