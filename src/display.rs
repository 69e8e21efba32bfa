//! Display
//!
//! Table rendering of recommendation results for terminals.

use std::{io, ops::Range};

use rusty_money::MoneyError;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    catalog::Catalog,
    combos::ComboOffer,
    menu::{Diet, ItemId, MenuItem},
};

/// Placeholder shown for a combo slot that could not be filled.
const EMPTY_SLOT: &str = "(none)";

/// Errors that can occur when rendering results.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Writes the checkout upsell list as a table, one row per recommended item.
///
/// # Errors
///
/// Returns [`DisplayError::IO`] if writing fails.
pub fn write_upsell(
    mut out: impl io::Write,
    catalog: &Catalog<'_>,
    upsell: &[ItemId],
) -> Result<(), DisplayError> {
    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Category", "Tier", "Price"]);

    for (idx, id) in upsell.iter().enumerate() {
        match catalog.get(id.as_str()) {
            Some(item) => builder.push_record([
                format!("#{:<3}", idx + 1),
                item.name().to_string(),
                item.category().to_string(),
                item.tier().to_string(),
                format!("{}", item.price()),
            ]),
            None => builder.push_record([
                format!("#{:<3}", idx + 1),
                id.to_string(),
                String::new(),
                String::new(),
                String::new(),
            ]),
        }
    }

    write_table(&mut out, builder, &[], 4..5)
}

/// Writes one diet's landing-page combos as a table, one block of rows per combo.
///
/// # Errors
///
/// Returns a [`DisplayError`] if a combo's price cannot be computed or writing fails.
pub fn write_combos(
    mut out: impl io::Write,
    catalog: &Catalog<'_>,
    diet: Diet,
    combos: &[ComboOffer<'_>],
) -> Result<(), DisplayError> {
    let mut builder = Builder::default();
    let mut boundaries = Vec::with_capacity(combos.len());

    builder.push_record(["", "Items", "Total", "Discount", "Pay"]);

    for (idx, combo) in combos.iter().enumerate() {
        let names: Vec<&str> = combo
            .item_ids()
            .iter()
            .map(|id| {
                id.as_ref().map_or(EMPTY_SLOT, |id| {
                    catalog.get(id.as_str()).map_or(id.as_str(), MenuItem::name)
                })
            })
            .collect();

        let pay = combo.total().sub(*combo.discount())?;

        boundaries.push(idx + 1);

        builder.push_record([
            format!("#{:<3}", idx + 1),
            names.join("\n"),
            format!("{}", combo.total()),
            format!("{}", combo.discount()),
            format!("{pay}"),
        ]);
    }

    writeln!(out, "\nCombos ({diet})").map_err(|_err| DisplayError::IO)?;

    write_table(&mut out, builder, &boundaries, 2..5)
}

fn write_table(
    out: &mut impl io::Write,
    builder: Builder,
    boundary_rows: &[usize],
    money_columns: Range<usize>,
) -> Result<(), DisplayError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    for &row in boundary_rows {
        if row > 1 {
            theme.insert_horizontal_line(row, separator);
        }
    }

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(money_columns), Alignment::right());

    writeln!(out, "{table}").map_err(|_err| DisplayError::IO)
}
