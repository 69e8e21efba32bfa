//! Carte
//!
//! Carte is a menu recommendation engine for restaurant ordering apps: it suggests upsell items
//! at checkout, builds discounted combo offers for the landing page and verifies the prices
//! clients submit against the catalog.

pub mod cart;
pub mod catalog;
pub mod combos;
pub mod display;
pub mod filters;
pub mod fixtures;
pub mod menu;
pub mod prelude;
pub mod pricing;
pub mod random;
pub mod recommend;
pub mod selector;
pub mod utils;
pub mod verify;
