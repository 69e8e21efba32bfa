//! Fixtures

use std::{fs, path::PathBuf};

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogError},
    fixtures::{cart::CartFixture, menu::MenuFixture, orders::OrdersFixture},
    menu::MenuItem,
    pricing::{MaxDiscount, PricingError},
    verify::{OrderLine, VerifyError},
};

pub mod cart;
pub mod menu;
pub mod orders;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Menu item not found
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    /// The menu defines no items, so its currency is unknown
    #[error("Menu has no items; currency unknown")]
    EmptyMenu,

    /// No menu loaded yet
    #[error("No menu loaded")]
    NoMenu,

    /// No cart loaded yet
    #[error("No cart loaded")]
    NoCart,

    /// No settings loaded yet
    #[error("No settings loaded")]
    NoSettings,

    /// Catalog construction error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Cart construction error
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Invalid maximum discount
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Invalid order data
    #[error(transparent)]
    Verify(#[from] VerifyError),
}

/// Settings Fixture
#[derive(Debug, Deserialize)]
pub struct SettingsFixture {
    /// Maximum discount fraction, between 0 and 1
    pub max_discount: f64,
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Loaded menu
    catalog: Option<Catalog<'a>>,

    /// Loaded cart
    cart: Option<Cart>,

    /// Loaded maximum discount
    max_discount: Option<MaxDiscount>,

    /// Loaded order lines
    orders: Vec<OrderLine<'a>>,
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: None,
            cart: None,
            max_discount: None,
            orders: Vec::new(),
        }
    }

    fn read(&self, kind: &str, name: &str) -> Result<String, FixtureError> {
        let file_path = self.base_path.join(kind).join(format!("{name}.yml"));

        Ok(fs::read_to_string(file_path)?)
    }

    /// Load a menu from a YAML fixture file, replacing any loaded menu
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if it defines no items, or if
    /// its prices do not share one currency.
    pub fn load_menu(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: MenuFixture = serde_norway::from_str(&self.read("menus", name)?)?;

        // The first item's price sets the catalog currency
        let (_minor_units, currency) = fixture
            .items
            .first()
            .map(|item| menu::parse_price(&item.price))
            .ok_or(FixtureError::EmptyMenu)??;

        let items = fixture
            .items
            .into_iter()
            .map(MenuItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut catalog = Catalog::with_items(items, currency)?;

        for (id, price) in fixture.extras {
            let (minor_units, extra_currency) = menu::parse_price(&price)?;

            catalog.insert_extra(id, Money::from_minor(minor_units, extra_currency))?;
        }

        self.catalog = Some(catalog);

        Ok(self)
    }

    /// Load a cart from a YAML fixture file, replacing any loaded cart
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if no menu is loaded, if a line
    /// names an item missing from the menu, or if the cart is invalid.
    pub fn load_cart(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: CartFixture = serde_norway::from_str(&self.read("carts", name)?)?;
        let catalog = self.catalog()?;

        let lines = fixture
            .lines
            .into_iter()
            .map(|line| {
                let category = catalog
                    .get(line.item.as_str())
                    .map(MenuItem::category)
                    .ok_or_else(|| FixtureError::ItemNotFound(line.item.to_string()))?;

                Ok(CartLine::new(line.item, line.qty, category))
            })
            .collect::<Result<Vec<_>, FixtureError>>()?;

        self.cart = Some(Cart::with_lines(lines, fixture.pax)?);

        Ok(self)
    }

    /// Load settings from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the maximum discount is
    /// outside `[0, 1]`.
    pub fn load_settings(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: SettingsFixture = serde_norway::from_str(&self.read("settings", name)?)?;

        self.max_discount = Some(MaxDiscount::try_from(fixture.max_discount)?);

        Ok(self)
    }

    /// Load submitted order lines from a YAML fixture file, appending to any loaded lines
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a line has an unknown
    /// source or a malformed price.
    pub fn load_orders(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: OrdersFixture = serde_norway::from_str(&self.read("orders", name)?)?;

        for line in fixture.lines {
            self.orders.push(line.try_into()?);
        }

        Ok(self)
    }

    /// Load a complete fixture set (menu, cart and settings with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_menu(name)?
            .load_cart(name)?
            .load_settings(name)?;

        Ok(fixture)
    }

    /// Get the loaded catalog
    ///
    /// # Errors
    ///
    /// Returns an error if no menu has been loaded.
    pub fn catalog(&self) -> Result<&Catalog<'a>, FixtureError> {
        self.catalog.as_ref().ok_or(FixtureError::NoMenu)
    }

    /// Get the loaded cart
    ///
    /// # Errors
    ///
    /// Returns an error if no cart has been loaded.
    pub fn cart(&self) -> Result<&Cart, FixtureError> {
        self.cart.as_ref().ok_or(FixtureError::NoCart)
    }

    /// Get the loaded maximum discount
    ///
    /// # Errors
    ///
    /// Returns an error if no settings have been loaded.
    pub fn max_discount(&self) -> Result<MaxDiscount, FixtureError> {
        self.max_discount.ok_or(FixtureError::NoSettings)
    }

    /// Get all loaded order lines
    pub fn orders(&self) -> &[OrderLine<'a>] {
        &self.orders
    }

    /// Get the menu currency
    ///
    /// # Errors
    ///
    /// Returns an error if no menu has been loaded.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        Ok(self.catalog()?.currency())
    }
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}
