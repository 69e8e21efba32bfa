//! Order Fixtures

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, menu::parse_price},
    menu::ItemId,
    verify::{OrderLine, OrderSource, OrderedItem},
};

/// Wrapper for submitted order lines in YAML
#[derive(Debug, Deserialize)]
pub struct OrdersFixture {
    /// Order lines, in submission order
    pub lines: Vec<OrderLineFixture>,
}

/// Order Line Fixture
#[derive(Debug, Deserialize)]
pub struct OrderLineFixture {
    /// Source name (e.g., `LandingPage`)
    pub source: String,

    /// Ordered items
    pub items: Vec<OrderedItemFixture>,

    /// Claimed price (e.g., "573.50 INR")
    pub price: String,

    /// Claimed discount (e.g., "63.00 INR")
    pub discount: String,
}

/// Ordered Item Fixture
#[derive(Debug, Deserialize)]
pub struct OrderedItemFixture {
    /// Menu item id
    pub item: ItemId,

    /// Add-on and size option ids
    #[serde(default)]
    pub extras: Vec<String>,
}

impl TryFrom<OrderLineFixture> for OrderLine<'_> {
    type Error = FixtureError;

    fn try_from(fixture: OrderLineFixture) -> Result<Self, Self::Error> {
        let source: OrderSource = fixture.source.parse()?;

        Ok(OrderLine::new(
            source,
            fixture
                .items
                .into_iter()
                .map(|item| OrderedItem::new(item.item).with_extras(item.extras)),
            money(&fixture.price)?,
            money(&fixture.discount)?,
        ))
    }
}

fn money(s: &str) -> Result<Money<'static, Currency>, FixtureError> {
    let (minor_units, currency) = parse_price(s)?;

    Ok(Money::from_minor(minor_units, currency))
}
