//! Price verification
//!
//! Cross-checks client-submitted order lines against the catalog before an order is accepted.

use std::{fmt, str::FromStr};

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    catalog::Catalog,
    menu::{ItemId, MenuItem},
    pricing::{self, MaxDiscount},
};

/// Default allowed difference between claimed and recomputed amounts, in major units.
pub const DEFAULT_TOLERANCE_MAJOR: i64 = 5;

/// Errors parsing order data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// The order line source is not recognised.
    #[error("unknown order source: {0}")]
    UnknownSource(String),
}

/// Where in the app an order line was added from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderSource {
    /// Added from the plain menu, no combo.
    None,

    /// Accepted checkout upsell.
    Checkout,

    /// Quick bites shelf.
    QuickBites,

    /// Combo built on the menu screen.
    Menu,

    /// Landing-page combo.
    LandingPage,
}

impl OrderSource {
    /// Whether lines from this source are discounted combos.
    pub fn is_discounted(self) -> bool {
        matches!(self, OrderSource::Menu | OrderSource::LandingPage)
    }

    /// Wire name of the source.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderSource::None => "None",
            OrderSource::Checkout => "Checkout",
            OrderSource::QuickBites => "Quickbites",
            OrderSource::Menu => "Menu",
            OrderSource::LandingPage => "LandingPage",
        }
    }
}

impl fmt::Display for OrderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderSource {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(OrderSource::None),
            "Checkout" => Ok(OrderSource::Checkout),
            "Quickbites" | "QuickBites" => Ok(OrderSource::QuickBites),
            "Menu" => Ok(OrderSource::Menu),
            "LandingPage" => Ok(OrderSource::LandingPage),
            other => Err(VerifyError::UnknownSource(other.to_string())),
        }
    }
}

/// One menu item within an order line, with any add-ons or size options chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedItem {
    item_id: ItemId,
    extras: SmallVec<[String; 2]>,
}

impl OrderedItem {
    /// Creates an ordered item with no extras.
    pub fn new(item_id: impl Into<ItemId>) -> Self {
        Self {
            item_id: item_id.into(),
            extras: SmallVec::new(),
        }
    }

    /// Adds extras by id.
    #[must_use]
    pub fn with_extras<S: Into<String>>(mut self, extras: impl IntoIterator<Item = S>) -> Self {
        self.extras.extend(extras.into_iter().map(Into::into));
        self
    }

    /// Menu item id.
    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    /// Extra ids.
    pub fn extras(&self) -> &[String] {
        &self.extras
    }
}

/// An order line as claimed by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine<'a> {
    source: OrderSource,
    items: Vec<OrderedItem>,
    price: Money<'a, Currency>,
    discount: Money<'a, Currency>,
}

impl<'a> OrderLine<'a> {
    /// Creates an order line.
    pub fn new(
        source: OrderSource,
        items: impl IntoIterator<Item = OrderedItem>,
        price: Money<'a, Currency>,
        discount: Money<'a, Currency>,
    ) -> Self {
        Self {
            source,
            items: items.into_iter().collect(),
            price,
            discount,
        }
    }

    /// Source of the line.
    pub fn source(&self) -> OrderSource {
        self.source
    }

    /// Items in the line.
    pub fn items(&self) -> &[OrderedItem] {
        &self.items
    }

    /// Claimed price.
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// Claimed discount.
    pub fn discount(&self) -> &Money<'a, Currency> {
        &self.discount
    }
}

/// The default tolerance, [`DEFAULT_TOLERANCE_MAJOR`] whole units of `currency`.
pub fn default_tolerance(currency: &'static Currency) -> Money<'static, Currency> {
    Money::from_major(DEFAULT_TOLERANCE_MAJOR, currency)
}

/// Returns the indexes of order lines whose claimed price or discount disagrees with the
/// catalog by more than `tolerance`.
///
/// Plain lines must claim no discount. Combo lines must claim the tier-weighted discount of
/// their items at `max_discount`. Either way the claimed price must match the catalog price of
/// the items plus their extras. A line naming an unknown item or extra, or priced in another
/// currency, is always flagged.
pub fn verify_order_lines(
    catalog: &Catalog<'_>,
    lines: &[OrderLine<'_>],
    max_discount: MaxDiscount,
    tolerance: &Money<'_, Currency>,
) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(index, line)| {
            let verified = verify_line(catalog, line, max_discount, tolerance);

            if !verified {
                debug!(index, source = %line.source(), "order line failed verification");
            }

            !verified
        })
        .map(|(index, _)| index)
        .collect()
}

fn verify_line(
    catalog: &Catalog<'_>,
    line: &OrderLine<'_>,
    max_discount: MaxDiscount,
    tolerance: &Money<'_, Currency>,
) -> bool {
    let currency = catalog.currency();

    if line.price().currency() != currency || line.discount().currency() != currency {
        return false;
    }

    let Some(recomputed) = recompute_price(catalog, line.items()) else {
        return false;
    };

    let expected_discount = if line.source().is_discounted() {
        let items: Option<SmallVec<[&MenuItem<'_>; 4]>> = line
            .items()
            .iter()
            .map(|ordered| catalog.get(ordered.item_id().as_str()))
            .collect();

        let discount = items.ok_or(()).and_then(|items| {
            pricing::discount(items, max_discount, currency)
                .map(|discount| discount.to_minor_units())
                .map_err(|err| warn!(%err, "could not price combo discount"))
        });

        match discount {
            Ok(discount) => discount,
            Err(()) => return false,
        }
    } else {
        0
    };

    let tolerance = tolerance.to_minor_units();

    within(line.discount().to_minor_units(), expected_discount, tolerance)
        && within(line.price().to_minor_units(), recomputed, tolerance)
}

/// Catalog price of the items and their extras in minor units, or `None` if any id is unknown.
fn recompute_price(catalog: &Catalog<'_>, items: &[OrderedItem]) -> Option<i64> {
    items.iter().try_fold(0_i64, |acc, ordered| {
        let base = catalog.get(ordered.item_id().as_str())?.price().to_minor_units();

        let extras = ordered.extras().iter().try_fold(0_i64, |acc, extra| {
            acc.checked_add(catalog.extra(extra)?.to_minor_units())
        })?;

        acc.checked_add(base)?.checked_add(extras)
    })
}

fn within(claimed: i64, expected: i64, tolerance: i64) -> bool {
    claimed.abs_diff(expected) <= tolerance.unsigned_abs()
}
