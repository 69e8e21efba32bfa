//! Checkout Example
//!
//! Recommends upsell items for a cart at checkout.
//!
//! Use `-f` to load a fixture set by name
//! Use `-c` to swap in another cart fixture
//! Use `-d` to choose the diner's diet
//! Use `-s` to seed the random source
//!
//! Set `RUST_LOG=carte=debug` to trace the allocator's decisions.

use std::{io, time::Instant};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use carte::{
    display::write_upsell, fixtures::Fixture, recommend::predict_checkout_upsell,
    utils::DemoArgs,
};

/// Checkout Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = DemoArgs::parse();
    let mut fixture = Fixture::from_set(&args.fixture)?;

    if let Some(cart) = args.cart.as_deref() {
        fixture.load_cart(cart)?;
    }

    let catalog = fixture.catalog()?;
    let cart = fixture.cart()?;
    let mut rng = args.rng();

    let start = Instant::now();
    let upsell = predict_checkout_upsell(catalog, cart, args.diet, &mut rng);
    let elapsed = start.elapsed().as_secs_f32();

    println!(
        "Cart: {} line(s) for a party of {} ({} diet)",
        cart.len(),
        cart.pax(),
        args.diet
    );

    write_upsell(io::stdout().lock(), catalog, &upsell)?;

    println!("\nRecommended in {elapsed}s");

    Ok(())
}
