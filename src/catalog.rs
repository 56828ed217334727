//! Catalog

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, GBP},
};
use thiserror::Error;

use crate::offers::Offer;

/// Errors related to catalog construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two entries share the same item name.
    #[error("Item {0} is already in the catalog")]
    DuplicateItem(String),

    /// An entry's currency differs from the catalog currency (item, item currency, catalog currency).
    #[error("Item {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// An entry has a negative unit price.
    #[error("Item {0} has a negative unit price")]
    NegativePrice(String),
}

/// A recognised item: its unit price and optional offer.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    name: String,
    unit_price: Money<'static, Currency>,
    offer: Option<Offer>,
}

impl CatalogEntry {
    /// Creates a new entry.
    pub fn new(
        name: impl Into<String>,
        unit_price: Money<'static, Currency>,
        offer: Option<Offer>,
    ) -> Self {
        Self {
            name: name.into(),
            unit_price,
            offer,
        }
    }

    /// Item name, unique within a catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price of a single unit.
    pub fn unit_price(&self) -> &Money<'static, Currency> {
        &self.unit_price
    }

    /// Offer applied to this item, if any.
    pub fn offer(&self) -> Option<&Offer> {
        self.offer.as_ref()
    }

    /// Number of units charged at unit price when buying `quantity` units.
    pub fn chargeable_units(&self, quantity: usize) -> usize {
        self.offer
            .map_or(quantity, |offer| offer.chargeable_units(quantity))
    }

    /// Price of `quantity` units with the offer applied.
    pub fn line_total(&self, quantity: usize) -> Money<'static, Currency> {
        self.price_of(self.chargeable_units(quantity))
    }

    /// Price of `quantity` units at unit price, ignoring the offer.
    pub fn line_subtotal(&self, quantity: usize) -> Money<'static, Currency> {
        self.price_of(quantity)
    }

    fn price_of(&self, units: usize) -> Money<'static, Currency> {
        let units = i64::try_from(units).unwrap_or(i64::MAX);

        Money::from_minor(
            self.unit_price.to_minor_units().saturating_mul(units),
            self.unit_price.currency(),
        )
    }
}

/// Outcome of looking an item name up in the catalog.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Lookup<'c> {
    /// The name is in the catalog.
    Recognised(&'c CatalogEntry),

    /// The name is not in the catalog.
    Unrecognised,
}

static REFERENCE: LazyLock<Catalog> = LazyLock::new(|| {
    let entries = [
        CatalogEntry::new("apple", Money::from_minor(60, GBP), Some(Offer::TWO_FOR_ONE)),
        CatalogEntry::new("orange", Money::from_minor(25, GBP), Some(Offer::THREE_FOR_TWO)),
    ];

    Catalog {
        entries: entries
            .into_iter()
            .map(|entry| (entry.name.clone(), entry))
            .collect(),
        currency: GBP,
    }
});

/// Item names mapped to their prices and offers, all in one currency.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: FxHashMap<String, CatalogEntry>,
    currency: &'static Currency,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Catalog {
            entries: FxHashMap::default(),
            currency,
        }
    }

    /// Create a catalog with the given entries.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if any entry is a duplicate, has the wrong currency or a negative price.
    pub fn with_entries(
        entries: impl IntoIterator<Item = CatalogEntry>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(currency);

        entries
            .into_iter()
            .try_for_each(|entry| catalog.insert(entry))?;

        Ok(catalog)
    }

    /// The apple and orange catalog, priced in GBP.
    pub fn reference() -> &'static Catalog {
        &REFERENCE
    }

    /// Add an entry to the catalog.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the name is taken, the currency differs or the price is negative.
    pub fn insert(&mut self, entry: CatalogEntry) -> Result<(), CatalogError> {
        if self.entries.contains_key(&entry.name) {
            return Err(CatalogError::DuplicateItem(entry.name));
        }

        let entry_currency = entry.unit_price.currency();

        if entry_currency != self.currency {
            return Err(CatalogError::CurrencyMismatch(
                entry.name,
                entry_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if entry.unit_price.is_negative() {
            return Err(CatalogError::NegativePrice(entry.name));
        }

        self.entries.insert(entry.name.clone(), entry);

        Ok(())
    }

    /// Classify an item name as recognised or unrecognised.
    pub fn lookup(&self, name: &str) -> Lookup<'_> {
        self.entries
            .get(name)
            .map_or(Lookup::Unrecognised, Lookup::Recognised)
    }

    /// Get an entry by item name.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// Iterate over the entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    /// Get the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the currency of the catalog.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference().clone()
    }
}
