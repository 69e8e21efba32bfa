//! Cart

use smallvec::SmallVec;
use thiserror::Error;

use crate::menu::{Category, ItemId};

/// Errors related to cart construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The party size was zero.
    #[error("party size must be at least 1")]
    EmptyParty,

    /// A cart line had a zero quantity (line index, item id).
    #[error("cart line {0} ({1}) has zero quantity")]
    ZeroQuantity(usize, ItemId),
}

/// One line of the customer's cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    item_id: ItemId,
    qty: u32,
    category: Category,
}

impl CartLine {
    /// Creates a cart line. The category is denormalised from the catalog for aggregation.
    pub fn new(item_id: impl Into<ItemId>, qty: u32, category: Category) -> Self {
        Self {
            item_id: item_id.into(),
            qty,
            category,
        }
    }

    /// Returns the item id
    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    /// Returns the ordered quantity
    pub fn qty(&self) -> u32 {
        self.qty
    }

    /// Returns the category of the ordered item
    pub fn category(&self) -> Category {
        self.category
    }
}

/// The customer's current cart and party size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    lines: SmallVec<[CartLine; 8]>,
    pax: u32,
}

impl Cart {
    /// Create an empty cart for a party of `pax` diners.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyParty`] if `pax` is zero.
    pub fn new(pax: u32) -> Result<Self, CartError> {
        Self::with_lines([], pax)
    }

    /// Create a cart with the given lines.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if `pax` is zero or a line has zero quantity.
    pub fn with_lines(
        lines: impl IntoIterator<Item = CartLine>,
        pax: u32,
    ) -> Result<Self, CartError> {
        if pax == 0 {
            return Err(CartError::EmptyParty);
        }

        let lines: SmallVec<[CartLine; 8]> = lines.into_iter().collect();

        if let Some((idx, line)) = lines.iter().enumerate().find(|(_, line)| line.qty == 0) {
            return Err(CartError::ZeroQuantity(idx, line.item_id.clone()));
        }

        Ok(Self { lines, pax })
    }

    /// Party size.
    pub fn pax(&self) -> u32 {
        self.pax
    }

    /// Cart lines in the order they were added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether any line orders the given item.
    pub fn contains(&self, item_id: &str) -> bool {
        self.lines.iter().any(|line| line.item_id.as_str() == item_id)
    }

    /// Total quantity ordered in a category.
    pub fn quantity_in(&self, category: Category) -> u64 {
        self.lines
            .iter()
            .filter(|line| line.category == category)
            .map(|line| u64::from(line.qty))
            .sum()
    }

    /// Get the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn zero_pax_is_rejected() {
        assert_eq!(Cart::new(0), Err(CartError::EmptyParty));
    }

    #[test]
    fn zero_quantity_lines_are_rejected() {
        let result = Cart::with_lines(
            [
                CartLine::new("st_001", 1, Category::Starters),
                CartLine::new("mc_001", 0, Category::MainCourse),
            ],
            2,
        );

        assert_eq!(
            result,
            Err(CartError::ZeroQuantity(1, ItemId::new("mc_001")))
        );
    }

    #[test]
    fn quantity_in_sums_lines_per_category() -> TestResult {
        let cart = Cart::with_lines(
            [
                CartLine::new("ss_001", 2, Category::SoupsAndSalads),
                CartLine::new("ss_002", 1, Category::SoupsAndSalads),
                CartLine::new("bv_001", 4, Category::Beverages),
            ],
            3,
        )?;

        assert_eq!(cart.quantity_in(Category::SoupsAndSalads), 3);
        assert_eq!(cart.quantity_in(Category::Beverages), 4);
        assert_eq!(cart.quantity_in(Category::MainCourse), 0);
        assert!(cart.contains("ss_002"));
        assert!(!cart.contains("mc_001"));
        assert_eq!(cart.pax(), 3);

        Ok(())
    }
}
