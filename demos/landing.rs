//! Landing Example
//!
//! Builds the landing-page combos for a menu at the configured maximum discount.
//!
//! Use `-f` to load a fixture set by name
//! Use `-d` to choose the diet to build combos for
//! Use `-s` to seed the random source

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use carte::{
    combos::predict_landing_combos_with, display::write_combos, fixtures::Fixture,
    utils::DemoArgs,
};

/// Landing Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = DemoArgs::parse();
    let fixture = Fixture::from_set(&args.fixture)?;

    let catalog = fixture.catalog()?;
    let max_discount = fixture.max_discount()?;
    let mut rng = args.rng();

    let combos = predict_landing_combos_with(catalog, &[args.diet], max_discount, &mut rng)?;

    println!("Maximum discount: {max_discount}");

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for (diet, offers) in &combos {
        write_combos(&mut handle, catalog, *diet, offers)?;
    }

    Ok(())
}
