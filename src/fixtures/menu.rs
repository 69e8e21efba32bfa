//! Menu Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, INR, USD},
};
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    menu::{Category, Diet, FlavorTier, ItemId, MenuItem},
};

/// Wrapper for a menu in YAML
#[derive(Debug, Deserialize)]
pub struct MenuFixture {
    /// Menu items, in catalog order
    pub items: Vec<MenuItemFixture>,

    /// Add-ons and size options: extra id -> price
    #[serde(default)]
    pub extras: FxHashMap<String, String>,
}

/// Menu Item Fixture
#[derive(Debug, Deserialize)]
pub struct MenuItemFixture {
    /// Item id
    pub id: ItemId,

    /// Display name, defaults to the id
    pub name: Option<String>,

    /// Menu category
    pub category: Category,

    /// Free-text subcategory
    #[serde(default)]
    pub subcategory: String,

    /// Diet key
    pub diet: Diet,

    /// Flavor tier
    pub tier: FlavorTier,

    /// Price (e.g., "189.00 INR")
    pub price: String,

    /// Whether the kitchen can currently serve the item
    #[serde(default = "available_by_default")]
    pub available: bool,
}

fn available_by_default() -> bool {
    true
}

impl TryFrom<MenuItemFixture> for MenuItem<'_> {
    type Error = FixtureError;

    fn try_from(fixture: MenuItemFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;
        let name = fixture
            .name
            .unwrap_or_else(|| fixture.id.as_str().to_string());

        Ok(MenuItem::new(
            fixture.id,
            fixture.category,
            fixture.diet,
            fixture.tier,
            Money::from_minor(minor_units, currency),
        )
        .with_name(name)
        .with_subcategory(fixture.subcategory)
        .with_availability(fixture.available))
    }
}

/// Parse price string (e.g., "189.00 INR") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a decimal number with at most the currency's minor
/// digits, or if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = match *currency_code {
        "INR" => INR,
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let minor_units = 10_i64
        .checked_pow(currency.exponent)
        .and_then(|scale| amount.checked_mul(Decimal::from(scale)))
        .filter(|minor| minor.fract().is_zero())
        .and_then(|minor| minor.to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_price_rejects_invalid_format() {
        assert!(matches!(
            parse_price("189INR"),
            Err(FixtureError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("1.005 INR"),
            Err(FixtureError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("-5 INR"),
            Err(FixtureError::InvalidPrice(_))
        ));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_scales_by_currency_exponent() -> TestResult {
        let (inr_minor, inr) = parse_price("189 INR")?;
        let (gbp_minor, gbp) = parse_price("2.50 GBP")?;

        assert_eq!(inr_minor, 18_900);
        assert_eq!(inr, INR);
        assert_eq!(gbp_minor, 250);
        assert_eq!(gbp, GBP);

        Ok(())
    }

    #[test]
    fn item_fixture_defaults_name_and_availability() -> TestResult {
        let fixture: MenuItemFixture = serde_norway::from_str(
            "id: mc_001\ncategory: Main Course\ndiet: V\ntier: Horses\nprice: 320.00 INR\n",
        )?;
        let item: MenuItem<'_> = fixture.try_into()?;

        assert_eq!(item.name(), "mc_001");
        assert!(item.is_available());
        assert_eq!(item.subcategory(), "");
        assert_eq!(item.price().to_minor_units(), 32_000);

        Ok(())
    }
}
