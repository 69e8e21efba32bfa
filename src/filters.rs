//! Catalog and cart filters
//!
//! Narrow a catalog down to the universe of items that may be recommended to a diner.

use crate::{
    cart::Cart,
    menu::{Category, Diet, MenuItem},
};

/// Whether an item suits the requested diet.
///
/// - Vegetarian diners only see vegetarian items.
/// - Eggetarian diners see eggetarian and vegetarian items.
/// - Non-vegetarian diners see every dessert and beverage, plus items classified exactly as
///   non-vegetarian.
pub fn suits_diet(item: &MenuItem<'_>, diet: Diet) -> bool {
    match diet {
        Diet::Veg => item.diet() == Diet::Veg,
        Diet::Egg => matches!(item.diet(), Diet::Egg | Diet::Veg),
        Diet::NonVeg => {
            matches!(item.category(), Category::Desserts | Category::Beverages)
                || item.diet() == diet
        }
    }
}

/// Offerable items suiting `diet`, in catalog order.
///
/// Unavailable items and the `Combos`/`Alcoholic` subcategories are dropped first.
pub fn eligible_for_diet<'c, 'a>(
    items: impl IntoIterator<Item = &'c MenuItem<'a>>,
    diet: Diet,
) -> Vec<&'c MenuItem<'a>>
where
    'a: 'c,
{
    items
        .into_iter()
        .filter(|item| item.is_offerable() && suits_diet(item, diet))
        .collect()
}

/// Items whose id is not already in the cart.
pub fn excluding_cart<'c, 'a>(items: &[&'c MenuItem<'a>], cart: &Cart) -> Vec<&'c MenuItem<'a>> {
    items
        .iter()
        .copied()
        .filter(|item| !cart.contains(item.id().as_str()))
        .collect()
}

/// Items in the given category.
pub fn in_category<'c, 'a>(items: &[&'c MenuItem<'a>], category: Category) -> Vec<&'c MenuItem<'a>> {
    items
        .iter()
        .copied()
        .filter(|item| item.category() == category)
        .collect()
}
