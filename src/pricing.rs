//! Pricing
//!
//! Totals and tier-weighted discounts over resolved item sets. The only configuration is the
//! operator-controlled [`MaxDiscount`], passed in explicitly by the caller.

use std::{fmt, str::FromStr};

use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::menu::{FlavorTier, MenuItem};

/// Errors that can occur while pricing items.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// The maximum discount must lie within `[0, 1]`.
    #[error("maximum discount {0} is outside [0, 1]")]
    MaxDiscountOutOfRange(Decimal),

    /// The maximum discount could not be read as a decimal number.
    #[error("invalid maximum discount: {0}")]
    InvalidMaxDiscount(String),

    /// An item is priced in a different currency (item currency, expected currency).
    #[error("item priced in {0}, expected {1}")]
    CurrencyMismatch(&'static str, &'static str),

    /// The discount could not be represented in minor units.
    #[error("discount overflowed while converting to minor units")]
    Overflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Fraction of a tier-weighted price that can be discounted, between 0 and 1.
///
/// Set by the operator; each call takes a snapshot of the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct MaxDiscount(Decimal);

impl MaxDiscount {
    /// No discount at all.
    pub const ZERO: MaxDiscount = MaxDiscount(Decimal::ZERO);

    /// Creates a new maximum discount.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::MaxDiscountOutOfRange`] if `value` is negative or above one.
    pub fn new(value: Decimal) -> Result<Self, PricingError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(PricingError::MaxDiscountOutOfRange(value));
        }

        Ok(Self(value))
    }

    /// Returns the fraction as a decimal.
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl TryFrom<f64> for MaxDiscount {
    type Error = PricingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let value = Decimal::from_f64(value)
            .ok_or_else(|| PricingError::InvalidMaxDiscount(value.to_string()))?;

        Self::new(value)
    }
}

impl FromStr for MaxDiscount {
    type Err = PricingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parsed = Decimal::from_str(value.trim())
            .map_err(|_err| PricingError::InvalidMaxDiscount(value.to_string()))?;

        Self::new(parsed)
    }
}

impl fmt::Display for MaxDiscount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Share of the maximum discount each flavor tier attracts.
pub fn tier_share(tier: FlavorTier) -> Decimal {
    match tier {
        FlavorTier::Stars => Decimal::new(15, 2),
        FlavorTier::Horses => Decimal::new(50, 2),
        FlavorTier::Puzzles => Decimal::new(75, 2),
        FlavorTier::Dogs => Decimal::new(90, 2),
        FlavorTier::Unranked => Decimal::ZERO,
    }
}

/// Calculates the total price of a set of items.
///
/// # Errors
///
/// Returns a [`PricingError::Money`] if an item is priced in a different currency.
pub fn total<'c, 'a: 'c>(
    items: impl IntoIterator<Item = &'c MenuItem<'a>>,
    currency: &'static Currency,
) -> Result<Money<'a, Currency>, PricingError> {
    let total = items
        .into_iter()
        .try_fold(Money::from_minor(0, currency), |acc, item| {
            acc.add(*item.price())
        })?;

    Ok(total)
}

/// Calculates the discount on a set of items.
///
/// Each item contributes `tier_share(tier) * max_discount * price`; the sum is floored to a
/// whole major currency unit once, not per item.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the discount does not fit in minor units, or
/// [`PricingError::CurrencyMismatch`] if an item is priced in a different currency.
pub fn discount<'c, 'a: 'c>(
    items: impl IntoIterator<Item = &'c MenuItem<'a>>,
    max_discount: MaxDiscount,
    currency: &'static Currency,
) -> Result<Money<'a, Currency>, PricingError> {
    let mut weighted_minor = Decimal::ZERO;

    for item in items {
        if item.price().currency() != currency {
            return Err(PricingError::CurrencyMismatch(
                item.price().currency().iso_alpha_code,
                currency.iso_alpha_code,
            ));
        }

        let price =
            Decimal::from_i64(item.price().to_minor_units()).ok_or(PricingError::Overflow)?;
        let share = tier_share(item.tier())
            .checked_mul(max_discount.value())
            .and_then(|share| share.checked_mul(price))
            .ok_or(PricingError::Overflow)?;

        weighted_minor = weighted_minor
            .checked_add(share)
            .ok_or(PricingError::Overflow)?;
    }

    let minor_per_major = 10_i64
        .checked_pow(currency.exponent)
        .map(Decimal::from)
        .ok_or(PricingError::Overflow)?;

    let floored_minor = weighted_minor
        .checked_div(minor_per_major)
        .map(|major| major.floor())
        .and_then(|major| major.checked_mul(minor_per_major))
        .and_then(|minor| minor.to_i64())
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(floored_minor, currency))
}
