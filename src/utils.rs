//! Utils

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::menu::Diet;

/// Arguments for the demo programs
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Fixture set to load the menu, cart & settings from
    #[clap(short, long, default_value = "bistro")]
    pub fixture: String,

    /// Cart fixture to use instead of the set's own cart
    #[clap(short, long)]
    pub cart: Option<String>,

    /// Diner's diet key (V, E or N)
    #[clap(short, long, default_value = "V")]
    pub diet: Diet,

    /// Seed for reproducible recommendations; random when omitted
    #[clap(short, long)]
    pub seed: Option<u64>,
}

impl DemoArgs {
    /// Random source for the run: seeded when `--seed` is given, from OS entropy otherwise.
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_defaults() -> TestResult {
        let args = DemoArgs::try_parse_from(["demo"])?;

        assert_eq!(args.fixture, "bistro");
        assert_eq!(args.diet, Diet::Veg);
        assert!(args.cart.is_none());
        assert!(args.seed.is_none());

        Ok(())
    }

    #[test]
    fn parses_overrides() -> TestResult {
        let args = DemoArgs::try_parse_from(["demo", "-d", "E", "--seed", "7", "-c", "empty"])?;

        assert_eq!(args.diet, Diet::Egg);
        assert_eq!(args.cart.as_deref(), Some("empty"));
        assert_eq!(args.seed, Some(7));

        Ok(())
    }

    #[test]
    fn seeded_rng_is_reproducible() -> TestResult {
        let args = DemoArgs::try_parse_from(["demo", "--seed", "42"])?;

        assert_eq!(args.rng().r#gen::<u64>(), args.rng().r#gen::<u64>());

        Ok(())
    }
}
