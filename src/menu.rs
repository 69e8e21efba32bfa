//! Menu items
//!
//! The catalog entries the engine recommends from, along with the small closed vocabularies
//! (category, diet, flavor tier) the recommendation rules are written against.

use std::{borrow::Borrow, fmt, str::FromStr};

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use thiserror::Error;

/// Subcategories that are never offered as a recommendation.
pub const EXCLUDED_SUBCATEGORIES: [&str; 2] = ["Combos", "Alcoholic"];

/// Errors raised when parsing menu vocabulary from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    /// The category name is not one of the known menu categories.
    #[error("unknown menu category: {0}")]
    UnknownCategory(String),

    /// The diet key is not `V`, `E` or `N`.
    #[error("unknown diet key: {0}")]
    UnknownDiet(String),

    /// The flavor tier is not one of the known tiers.
    #[error("unknown flavor tier: {0}")]
    UnknownFlavorTier(String),
}

/// Unique key of a menu item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new item id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Menu category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    /// Soups & Salads
    #[serde(rename = "Soups & Salads")]
    SoupsAndSalads,

    /// Starters
    Starters,

    /// Main Course
    #[serde(rename = "Main Course")]
    MainCourse,

    /// Desserts
    Desserts,

    /// Beverages
    Beverages,
}

impl Category {
    /// Display name as it appears on the menu.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::SoupsAndSalads => "Soups & Salads",
            Category::Starters => "Starters",
            Category::MainCourse => "Main Course",
            Category::Desserts => "Desserts",
            Category::Beverages => "Beverages",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = MenuError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Soups & Salads" => Ok(Category::SoupsAndSalads),
            "Starters" => Ok(Category::Starters),
            "Main Course" => Ok(Category::MainCourse),
            "Desserts" => Ok(Category::Desserts),
            "Beverages" => Ok(Category::Beverages),
            other => Err(MenuError::UnknownCategory(other.to_string())),
        }
    }
}

/// Diet classification, used both for menu items and for customer preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Diet {
    /// Vegetarian (`V`)
    #[serde(rename = "V")]
    Veg,

    /// Eggetarian (`E`)
    #[serde(rename = "E")]
    Egg,

    /// Non-vegetarian (`N`)
    #[serde(rename = "N")]
    NonVeg,
}

impl Diet {
    /// Single letter diet key.
    pub fn key(self) -> &'static str {
        match self {
            Diet::Veg => "V",
            Diet::Egg => "E",
            Diet::NonVeg => "N",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Diet {
    type Err = MenuError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "V" => Ok(Diet::Veg),
            "E" => Ok(Diet::Egg),
            "N" => Ok(Diet::NonVeg),
            other => Err(MenuError::UnknownDiet(other.to_string())),
        }
    }
}

/// Promotion/affinity rank of a menu item.
///
/// Tiers bias which items get recommended and how large a share of the configured maximum
/// discount they attract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum FlavorTier {
    /// Popular, low margin
    Horses,

    /// Popular, high margin
    Stars,

    /// Unpopular, high margin
    Puzzles,

    /// Unpopular, low margin
    Dogs,

    /// Not ranked (`NA`)
    #[serde(rename = "NA")]
    Unranked,
}

impl FlavorTier {
    /// Name as it appears in catalog data.
    pub fn as_str(self) -> &'static str {
        match self {
            FlavorTier::Horses => "Horses",
            FlavorTier::Stars => "Stars",
            FlavorTier::Puzzles => "Puzzles",
            FlavorTier::Dogs => "Dogs",
            FlavorTier::Unranked => "NA",
        }
    }
}

impl fmt::Display for FlavorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlavorTier {
    type Err = MenuError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Horses" => Ok(FlavorTier::Horses),
            "Stars" => Ok(FlavorTier::Stars),
            "Puzzles" => Ok(FlavorTier::Puzzles),
            "Dogs" => Ok(FlavorTier::Dogs),
            "NA" => Ok(FlavorTier::Unranked),
            other => Err(MenuError::UnknownFlavorTier(other.to_string())),
        }
    }
}

/// A single dish or drink on the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem<'a> {
    id: ItemId,
    name: String,
    category: Category,
    subcategory: String,
    diet: Diet,
    tier: FlavorTier,
    price: Money<'a, Currency>,
    available: bool,
}

impl<'a> MenuItem<'a> {
    /// Creates a new available menu item with no subcategory, named after its id.
    pub fn new(
        id: impl Into<ItemId>,
        category: Category,
        diet: Diet,
        tier: FlavorTier,
        price: Money<'a, Currency>,
    ) -> Self {
        let id = id.into();

        Self {
            name: id.to_string(),
            id,
            category,
            subcategory: String::new(),
            diet,
            tier,
            price,
            available: true,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the free-text subcategory.
    #[must_use]
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = subcategory.into();
        self
    }

    /// Sets whether the kitchen can currently serve the item.
    #[must_use]
    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Returns the item id
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the menu category
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the subcategory
    pub fn subcategory(&self) -> &str {
        &self.subcategory
    }

    /// Returns the diet classification
    pub fn diet(&self) -> Diet {
        self.diet
    }

    /// Returns the flavor tier
    pub fn tier(&self) -> FlavorTier {
        self.tier
    }

    /// Returns the price of the item
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// Returns whether the item can currently be served
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Whether the item may be recommended at all: it is available and is not a bundled combo
    /// or an alcoholic drink.
    pub fn is_offerable(&self) -> bool {
        self.available && !EXCLUDED_SUBCATEGORIES.contains(&self.subcategory.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::INR;
    use testresult::TestResult;

    use super::*;

    fn lassi<'a>() -> MenuItem<'a> {
        MenuItem::new(
            "bev_001",
            Category::Beverages,
            Diet::Veg,
            FlavorTier::Stars,
            Money::from_minor(12_000, INR),
        )
    }

    #[test]
    fn new_item_defaults_to_available_and_named_after_id() {
        let item = lassi();

        assert_eq!(item.name(), "bev_001");
        assert!(item.is_available());
        assert!(item.subcategory().is_empty());
        assert!(item.is_offerable());
    }

    #[test]
    fn unavailable_items_are_not_offerable() {
        let item = lassi().with_availability(false);

        assert!(!item.is_offerable());
    }

    #[test]
    fn combos_and_alcoholic_subcategories_are_not_offerable() {
        assert!(!lassi().with_subcategory("Combos").is_offerable());
        assert!(!lassi().with_subcategory("Alcoholic").is_offerable());
        assert!(lassi().with_subcategory("Mocktails").is_offerable());
    }

    #[test]
    fn vocabulary_parses_catalog_spellings() -> TestResult {
        assert_eq!("Soups & Salads".parse::<Category>()?, Category::SoupsAndSalads);
        assert_eq!("Main Course".parse::<Category>()?, Category::MainCourse);
        assert_eq!("E".parse::<Diet>()?, Diet::Egg);
        assert_eq!("NA".parse::<FlavorTier>()?, FlavorTier::Unranked);

        Ok(())
    }

    #[test]
    fn unknown_vocabulary_is_rejected() {
        assert_eq!(
            "Breads".parse::<Category>(),
            Err(MenuError::UnknownCategory("Breads".to_string()))
        );
        assert_eq!("X".parse::<Diet>(), Err(MenuError::UnknownDiet("X".to_string())));
        assert!(matches!(
            "Cats".parse::<FlavorTier>(),
            Err(MenuError::UnknownFlavorTier(_))
        ));
    }
}
