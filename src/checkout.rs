//! Checkout
//!
//! Prices a basket of item names against a [`Catalog`]. Every name is classified first, and
//! a basket containing any unrecognised name is rejected as a whole: no partial total is
//! ever produced.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    basket::Basket,
    catalog::{Catalog, CatalogEntry, Lookup},
    receipt::Receipt,
};

/// Errors that can occur at checkout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// One or more item names are not in the catalog, listed once per occurrence in scan order.
    #[error("ERROR - the following items were not recognised: {}.", .0.join(","))]
    UnrecognisedItems(Vec<String>),
}

/// A recognised item and the number of times it was scanned.
pub type RecognisedLine<'c> = (&'c CatalogEntry, usize);

/// A basket split into recognised items, grouped by name, and unrecognised names.
#[derive(Debug, Default)]
pub struct Partition<'c, 'b> {
    recognised: SmallVec<[RecognisedLine<'c>; 4]>,
    unrecognised: SmallVec<[&'b str; 4]>,
}

impl<'c, 'b> Partition<'c, 'b> {
    /// Recognised items with their quantities, in order of first appearance.
    pub fn recognised(&self) -> &[RecognisedLine<'c>] {
        &self.recognised
    }

    /// Unrecognised names in scan order, duplicates included.
    pub fn unrecognised(&self) -> &[&'b str] {
        &self.unrecognised
    }

    /// Returns the recognised lines, or the unrecognised names as an error if there are any.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::UnrecognisedItems`] if any name was unrecognised.
    pub fn into_recognised(self) -> Result<SmallVec<[RecognisedLine<'c>; 4]>, CheckoutError> {
        if self.unrecognised.is_empty() {
            return Ok(self.recognised);
        }

        warn!(
            unrecognised = self.unrecognised.len(),
            "rejecting basket with unrecognised items"
        );

        Err(CheckoutError::UnrecognisedItems(
            self.unrecognised
                .into_iter()
                .map(str::to_string)
                .collect(),
        ))
    }
}

/// Classify every item name, grouping recognised items by name.
pub fn partition<'c, 'b>(
    catalog: &'c Catalog,
    items: impl IntoIterator<Item = &'b str>,
) -> Partition<'c, 'b> {
    let mut partition = Partition::default();
    let mut positions: FxHashMap<&'c str, usize> = FxHashMap::default();

    for item in items {
        match catalog.lookup(item) {
            Lookup::Recognised(entry) => {
                let position = *positions.entry(entry.name()).or_insert_with(|| {
                    partition.recognised.push((entry, 0));
                    partition.recognised.len() - 1
                });

                if let Some((_, quantity)) = partition.recognised.get_mut(position) {
                    *quantity += 1;
                }
            }
            Lookup::Unrecognised => partition.unrecognised.push(item),
        }
    }

    partition
}

/// Total price in minor units of the items, priced against the reference catalog.
///
/// # Errors
///
/// Returns [`CheckoutError::UnrecognisedItems`] if any item is not in the catalog.
pub fn checkout<S: AsRef<str>>(items: &[S]) -> Result<i64, CheckoutError> {
    checkout_with(Catalog::reference(), items)
}

/// Total price in minor units of the items, priced against `catalog`.
///
/// # Errors
///
/// Returns [`CheckoutError::UnrecognisedItems`] if any item is not in the catalog.
#[tracing::instrument(name = "checkout.checkout", skip_all, fields(items = items.len()))]
pub fn checkout_with<S: AsRef<str>>(catalog: &Catalog, items: &[S]) -> Result<i64, CheckoutError> {
    let lines = partition(catalog, items.iter().map(AsRef::as_ref)).into_recognised()?;

    let total = lines
        .iter()
        .map(|(entry, quantity)| entry.line_total(*quantity).to_minor_units())
        .fold(0_i64, i64::saturating_add);

    debug!(total, lines = lines.len(), "priced basket");

    Ok(total)
}

/// Price a basket against `catalog`, returning a line by line receipt.
///
/// # Errors
///
/// Returns [`CheckoutError::UnrecognisedItems`] if any item is not in the catalog.
#[tracing::instrument(name = "checkout.price_basket", skip_all, fields(items = basket.len()))]
pub fn price_basket(catalog: &Catalog, basket: &Basket) -> Result<Receipt, CheckoutError> {
    let lines = partition(catalog, basket.iter()).into_recognised()?;

    let receipt = Receipt::from_lines(lines, catalog.currency());

    debug!(
        total = receipt.total().to_minor_units(),
        lines = receipt.lines().len(),
        "priced basket"
    );

    Ok(receipt)
}
