//! Course balancing
//!
//! Spreads a fixed number of recommendation slots across soups & salads, starters and main
//! courses so the table's order approaches a per-party-size target, then fills each slot with
//! a popular item of that course.

use std::cmp::Ordering;

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::{
    cart::Cart,
    menu::{Category, MenuItem},
    random::RandomSource,
    selector::POPULAR_TIERS,
};

/// Number of balanced-course slots recommended at checkout.
pub const DEFAULT_COURSE_SLOTS: usize = 3;

/// The savoury courses the allocator balances between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Course {
    /// Soups & Salads
    SoupsAndSalads,

    /// Starters
    Starters,

    /// Main Course
    MainCourse,
}

impl Course {
    /// All courses, in allocation order.
    pub const ALL: [Course; 3] = [Course::SoupsAndSalads, Course::Starters, Course::MainCourse];

    /// Menu category of the course.
    pub fn category(self) -> Category {
        match self {
            Course::SoupsAndSalads => Category::SoupsAndSalads,
            Course::Starters => Category::Starters,
            Course::MainCourse => Category::MainCourse,
        }
    }

    /// Course for a menu category, if it is one of the balanced courses.
    pub fn from_category(category: Category) -> Option<Course> {
        match category {
            Category::SoupsAndSalads => Some(Course::SoupsAndSalads),
            Category::Starters => Some(Course::Starters),
            Category::MainCourse => Some(Course::MainCourse),
            Category::Desserts | Category::Beverages => None,
        }
    }

    /// Ideal quantity of this course for a party of `pax`: one each, plus an extra starter.
    pub fn target(self, pax: u32) -> u64 {
        match self {
            Course::Starters => u64::from(pax) + 1,
            Course::SoupsAndSalads | Course::MainCourse => u64::from(pax),
        }
    }
}

/// One value per course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CourseTally<T> {
    /// Soups & Salads
    pub soups_and_salads: T,

    /// Starters
    pub starters: T,

    /// Main Course
    pub main_course: T,
}

impl<T: Copy> CourseTally<T> {
    /// Build a tally by evaluating `f` for every course.
    pub fn from_fn(mut f: impl FnMut(Course) -> T) -> Self {
        Self {
            soups_and_salads: f(Course::SoupsAndSalads),
            starters: f(Course::Starters),
            main_course: f(Course::MainCourse),
        }
    }

    /// Value for a course.
    pub fn get(&self, course: Course) -> T {
        match course {
            Course::SoupsAndSalads => self.soups_and_salads,
            Course::Starters => self.starters,
            Course::MainCourse => self.main_course,
        }
    }

    /// Mutable value for a course.
    pub fn get_mut(&mut self, course: Course) -> &mut T {
        match course {
            Course::SoupsAndSalads => &mut self.soups_and_salads,
            Course::Starters => &mut self.starters,
            Course::MainCourse => &mut self.main_course,
        }
    }
}

impl CourseTally<usize> {
    /// Sum over all courses.
    pub fn total(&self) -> usize {
        self.soups_and_salads + self.starters + self.main_course
    }

    /// The course holding every slot, if there is one.
    fn saturated(&self, slots: usize) -> Option<Course> {
        Course::ALL
            .into_iter()
            .find(|course| self.get(*course) == slots)
    }

    /// First course, in allocation order, with a slot left to fill.
    fn next_pending(&self) -> Option<Course> {
        Course::ALL.into_iter().find(|course| self.get(*course) > 0)
    }
}

/// How full a course is relative to its target.
///
/// Compared as exact fractions. `Excluded` sorts above every real ratio.
#[derive(Debug, Clone, Copy)]
enum Fill {
    Ratio { have: u64, target: u64 },
    Excluded,
}

impl Ord for Fill {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                Fill::Ratio { have, target },
                Fill::Ratio {
                    have: other_have,
                    target: other_target,
                },
            ) => (u128::from(*have) * u128::from(*other_target))
                .cmp(&(u128::from(*other_have) * u128::from(*target))),
            (Fill::Ratio { .. }, Fill::Excluded) => Ordering::Less,
            (Fill::Excluded, Fill::Ratio { .. }) => Ordering::Greater,
            (Fill::Excluded, Fill::Excluded) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Fill {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Fill {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fill {}

fn fills(cart: &Cart, recommended: &CourseTally<usize>) -> CourseTally<Fill> {
    CourseTally::from_fn(|course| Fill::Ratio {
        have: cart.quantity_in(course.category()) + recommended.get(course) as u64,
        target: course.target(cart.pax()),
    })
}

/// The least-filled course; ties go to the course with the fewest recommended slots, then to a
/// random pick.
fn least_filled<R>(
    fills: &CourseTally<Fill>,
    recommended: &CourseTally<usize>,
    rng: &mut R,
) -> Option<Course>
where
    R: RandomSource + ?Sized,
{
    let lowest = Course::ALL.into_iter().map(|course| fills.get(course)).min()?;

    let least: SmallVec<[Course; 3]> = Course::ALL
        .into_iter()
        .filter(|course| fills.get(*course) == lowest)
        .collect();

    if let [only] = least.as_slice() {
        return Some(*only);
    }

    let fewest = least.iter().map(|course| recommended.get(*course)).min()?;

    let tied: SmallVec<[Course; 3]> = least
        .into_iter()
        .filter(|course| recommended.get(*course) == fewest)
        .collect();

    rng.choose(&tied).copied()
}

/// Decides how many of `slots` recommendations go to each course.
///
/// Slots are handed out one at a time to the course whose cart-plus-recommended quantity is
/// furthest below its target. When two or more slots would all land in one course, one of them
/// is moved to the next least-filled course, so the result always spans at least two courses.
/// That correction runs once.
pub fn allocate_slots<R>(cart: &Cart, slots: usize, rng: &mut R) -> CourseTally<usize>
where
    R: RandomSource + ?Sized,
{
    let mut recommended = CourseTally::default();

    for _ in 0..slots {
        if let Some(course) = least_filled(&fills(cart, &recommended), &recommended, rng) {
            *recommended.get_mut(course) += 1;
        }
    }

    if slots < 2 {
        debug!(?recommended, "allocated course slots");

        return recommended;
    }

    if let Some(saturated) = recommended.saturated(slots) {
        warn!(?saturated, slots, "every slot landed in one course; moving one");

        *recommended.get_mut(saturated) -= 1;

        let mut corrected = fills(cart, &recommended);
        *corrected.get_mut(saturated) = Fill::Excluded;

        if let Some(course) = least_filled(&corrected, &recommended, rng) {
            *recommended.get_mut(course) += 1;
        }
    }

    debug!(?recommended, "allocated course slots");

    recommended
}

/// Recommends up to `slots` popular items spread across the savoury courses.
///
/// `cart_universe` is the diet-eligible menu minus the items already in the cart. Each slot is
/// filled with the first Horses or Stars item of its course from a single shuffle of the
/// universe. A course with nothing left to offer hands its slot to the other course with the
/// fewest pending slots; after `slots` such hand-offs the items found so far are returned.
pub fn balance_courses<'c, 'a, R>(
    cart: &Cart,
    cart_universe: &[&'c MenuItem<'a>],
    slots: usize,
    rng: &mut R,
) -> SmallVec<[&'c MenuItem<'a>; 4]>
where
    R: RandomSource + ?Sized,
{
    let mut pending = allocate_slots(cart, slots, rng);

    let mut shuffled: Vec<&'c MenuItem<'a>> = cart_universe.to_vec();
    rng.shuffle(&mut shuffled);

    let mut picked: SmallVec<[&'c MenuItem<'a>; 4]> = SmallVec::new();
    let mut handoffs = 0;

    while let Some(course) = pending.next_pending() {
        *pending.get_mut(course) -= 1;

        let found = shuffled.iter().copied().find(|item| {
            item.category() == course.category()
                && POPULAR_TIERS.contains(&item.tier())
                && !picked.iter().any(|chosen| chosen.id() == item.id())
        });

        if let Some(item) = found {
            picked.push(item);
            continue;
        }

        if handoffs == slots {
            warn!(
                found = picked.len(),
                slots, "not enough popular items to fill every course slot"
            );
            break;
        }

        handoffs += 1;

        let others: SmallVec<[Course; 2]> = Course::ALL
            .into_iter()
            .filter(|other| *other != course)
            .collect();

        let Some(fewest) = others.iter().map(|other| pending.get(*other)).min() else {
            break;
        };

        let candidates: SmallVec<[Course; 2]> = others
            .into_iter()
            .filter(|other| pending.get(*other) == fewest)
            .collect();

        if let Some(next) = rng.choose(&candidates) {
            debug!(from = ?course, to = ?next, "no popular item left; handing slot over");

            *pending.get_mut(*next) += 1;
        }
    }

    picked
}
