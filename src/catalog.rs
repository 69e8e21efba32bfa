//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use slotmap::{SlotMap, new_key_type};
use thiserror::Error;

use crate::menu::{ItemId, MenuItem};

new_key_type! {
    /// Menu Item Key
    pub struct MenuItemKey;
}

/// Errors related to catalog construction.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A price's currency differs from the catalog currency (id, price currency, catalog currency).
    #[error("{0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// Two menu items share the same id.
    #[error("duplicate menu item id: {0}")]
    DuplicateItem(ItemId),

    /// Two priced extras (add-ons or size options) share the same id.
    #[error("duplicate extra id: {0}")]
    DuplicateExtra(String),
}

/// The menu as supplied by the catalog store: every item, available or not, plus the priced
/// extras (add-ons and size options) that can be attached to an ordered item.
///
/// All prices share one currency.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    items: SlotMap<MenuItemKey, MenuItem<'a>>,
    ids: FxHashMap<ItemId, MenuItemKey>,
    extras: FxHashMap<String, Money<'a, Currency>>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create an empty catalog priced in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Catalog {
            items: SlotMap::with_key(),
            ids: FxHashMap::default(),
            extras: FxHashMap::default(),
            currency,
        }
    }

    /// Create a new catalog with the given items.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if an item is priced in another currency or an id repeats.
    pub fn with_items(
        items: impl IntoIterator<Item = MenuItem<'a>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(currency);

        items
            .into_iter()
            .try_for_each(|item| catalog.insert(item).map(|_key| ()))?;

        Ok(catalog)
    }

    /// Add a menu item to the catalog.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the item is priced in another currency or its id is taken.
    pub fn insert(&mut self, item: MenuItem<'a>) -> Result<MenuItemKey, CatalogError> {
        self.ensure_currency(item.id().as_str(), item.price())?;

        if self.ids.contains_key(item.id()) {
            return Err(CatalogError::DuplicateItem(item.id().clone()));
        }

        let id = item.id().clone();
        let key = self.items.insert(item);

        self.ids.insert(id, key);

        Ok(key)
    }

    /// Add a priced add-on or size option.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the price is in another currency or the id is taken.
    pub fn insert_extra(
        &mut self,
        id: impl Into<String>,
        price: Money<'a, Currency>,
    ) -> Result<(), CatalogError> {
        let id = id.into();

        self.ensure_currency(&id, &price)?;

        if self.extras.contains_key(&id) {
            return Err(CatalogError::DuplicateExtra(id));
        }

        self.extras.insert(id, price);

        Ok(())
    }

    fn ensure_currency(&self, id: &str, price: &Money<'a, Currency>) -> Result<(), CatalogError> {
        let price_currency = price.currency();

        if price_currency == self.currency {
            Ok(())
        } else {
            Err(CatalogError::CurrencyMismatch(
                id.to_string(),
                price_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ))
        }
    }

    /// Look up a menu item by id.
    pub fn get(&self, id: &str) -> Option<&MenuItem<'a>> {
        self.ids.get(id).and_then(|key| self.items.get(*key))
    }

    /// Look up the price of an add-on or size option.
    pub fn extra(&self, id: &str) -> Option<&Money<'a, Currency>> {
        self.extras.get(id)
    }

    /// Iterate over every menu item in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &MenuItem<'a>> {
        self.items.values()
    }

    /// Get the number of menu items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog has no menu items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the catalog.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
