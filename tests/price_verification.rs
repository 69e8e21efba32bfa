//! Integration tests for verifying submitted order lines against the bistro fixture menu.

use testresult::TestResult;

use carte::{
    fixtures::Fixture,
    pricing::MaxDiscount,
    verify::{OrderLine, OrderSource, default_tolerance, verify_order_lines},
};

fn fixture<'a>() -> Result<Fixture<'a>, carte::fixtures::FixtureError> {
    let mut fixture = Fixture::new();

    fixture
        .load_menu("bistro")?
        .load_settings("bistro")?
        .load_orders("bistro")?;

    Ok(fixture)
}

#[test]
fn flags_lines_that_disagree_with_the_menu() -> TestResult {
    let fixture = fixture()?;
    let catalog = fixture.catalog()?;
    let orders = fixture.orders();

    assert_eq!(orders.len(), 6);
    assert_eq!(orders.get(1).map(OrderLine::source), Some(OrderSource::LandingPage));

    let flagged = verify_order_lines(
        catalog,
        orders,
        fixture.max_discount()?,
        &default_tolerance(catalog.currency()),
    );

    assert_eq!(flagged, [2, 4, 5]);

    Ok(())
}

#[test]
fn zero_tolerance_flags_rounded_claims() -> TestResult {
    let fixture = fixture()?;
    let catalog = fixture.catalog()?;

    let flagged = verify_order_lines(
        catalog,
        fixture.orders(),
        fixture.max_discount()?,
        &rusty_money::Money::from_minor(0, catalog.currency()),
    );

    assert_eq!(flagged, [2, 3, 4, 5]);

    Ok(())
}

#[test]
fn a_different_max_discount_invalidates_combo_claims() -> TestResult {
    let fixture = fixture()?;
    let catalog = fixture.catalog()?;

    let flagged = verify_order_lines(
        catalog,
        fixture.orders(),
        MaxDiscount::ZERO,
        &default_tolerance(catalog.currency()),
    );

    assert_eq!(flagged, [1, 2, 3, 4, 5]);

    Ok(())
}
