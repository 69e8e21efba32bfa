//! Cart Fixtures

use serde::Deserialize;

use crate::menu::ItemId;

/// Wrapper for a cart in YAML
///
/// Line categories are looked up in the loaded menu, so a cart fixture must be loaded after
/// its menu.
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Party size
    pub pax: u32,

    /// Cart lines
    #[serde(default)]
    pub lines: Vec<CartLineFixture>,
}

/// Cart Line Fixture
#[derive(Debug, Deserialize)]
pub struct CartLineFixture {
    /// Menu item id
    pub item: ItemId,

    /// Quantity ordered
    pub qty: u32,
}
