//! Catalog Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    catalog::{Catalog, CatalogEntry},
    fixtures::FixtureError,
    offers::Offer,
};

/// Wrapper for a catalog in YAML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFixture {
    /// Catalog currency code (e.g. "GBP"); taken from the item prices when omitted
    #[serde(default)]
    pub currency: Option<String>,

    /// Map of item name -> item fixture
    #[serde(default)]
    pub items: FxHashMap<String, ItemFixture>,
}

/// Item Fixture
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemFixture {
    /// Unit price (e.g., "0.60 GBP")
    pub price: String,

    /// Optional offer on the item
    #[serde(default)]
    pub offer: Option<OfferFixture>,
}

/// Offer Fixture
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OfferFixture {
    /// Units in a complete bundle
    pub bundle_size: usize,

    /// Free units in each complete bundle
    pub free_count: usize,
}

impl CatalogFixture {
    /// Parse a catalog fixture from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or contains unknown keys.
    pub fn from_yaml_str(contents: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(contents)?)
    }
}

impl ItemFixture {
    fn try_into_entry(self, name: String) -> Result<CatalogEntry, FixtureError> {
        let (minor_units, currency) = parse_price(&self.price)?;

        let offer = match self.offer {
            Some(offer) => Some(
                Offer::new(offer.bundle_size, offer.free_count)
                    .map_err(|err| FixtureError::InvalidOffer(name.clone(), err))?,
            ),
            None => None,
        };

        Ok(CatalogEntry::new(
            name,
            Money::from_minor(minor_units, currency),
            offer,
        ))
    }
}

impl TryFrom<CatalogFixture> for Catalog {
    type Error = FixtureError;

    fn try_from(fixture: CatalogFixture) -> Result<Self, Self::Error> {
        let entries = fixture
            .items
            .into_iter()
            .map(|(name, item)| item.try_into_entry(name))
            .collect::<Result<Vec<_>, _>>()?;

        let currency = match fixture.currency.as_deref() {
            Some(code) => parse_currency(code)?,
            None => entries
                .first()
                .map(|entry| entry.unit_price().currency())
                .ok_or(FixtureError::NoCurrency)?,
        };

        Ok(Catalog::with_entries(entries, currency)?)
    }
}

/// Parse price string (e.g., "0.60 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a decimal or has more decimal places than the
/// currency's minor unit, or if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = parse_currency(currency_code)?;

    let amount = amount
        .parse::<Decimal>()
        .map_err(|err| FixtureError::InvalidPrice(format!("{s}: {err}")))?
        .normalize();

    if amount.scale() > currency.exponent {
        return Err(FixtureError::InvalidPrice(format!(
            "{s} has more than {} decimal places",
            currency.exponent
        )));
    }

    let minor_units = 10_i64
        .checked_pow(currency.exponent)
        .and_then(|factor| amount.checked_mul(Decimal::from(factor)))
        .and_then(|value| value.to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

/// Parse an ISO currency code.
///
/// # Errors
///
/// Returns [`FixtureError::UnknownCurrency`] for anything but GBP, USD and EUR.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}
