//! Receipt

use std::io;

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{catalog::CatalogEntry, checkout::RecognisedLine};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Everything bought of one item.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    name: String,
    quantity: usize,
    unit_price: Money<'static, Currency>,
    offer: Option<String>,
    chargeable_units: usize,
    subtotal: Money<'static, Currency>,
    total: Money<'static, Currency>,
}

impl ReceiptLine {
    /// Build the line for `quantity` units of `entry`.
    pub fn new(entry: &CatalogEntry, quantity: usize) -> Self {
        Self {
            name: entry.name().to_string(),
            quantity,
            unit_price: *entry.unit_price(),
            offer: entry.offer().map(ToString::to_string),
            chargeable_units: entry.chargeable_units(quantity),
            subtotal: entry.line_subtotal(quantity),
            total: entry.line_total(quantity),
        }
    }

    /// Item name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of units scanned
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Price of a single unit
    pub fn unit_price(&self) -> Money<'static, Currency> {
        self.unit_price
    }

    /// Number of units charged after the offer
    pub fn chargeable_units(&self) -> usize {
        self.chargeable_units
    }

    /// Price of every unit at unit price
    pub fn subtotal(&self) -> Money<'static, Currency> {
        self.subtotal
    }

    /// Price after the offer
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }

    /// Amount taken off by the offer
    pub fn savings(&self) -> Money<'static, Currency> {
        difference(self.subtotal, self.total)
    }
}

/// Final receipt for a priced basket.
#[derive(Debug, Clone)]
pub struct Receipt {
    /// One line per item, in order of first appearance in the basket
    lines: SmallVec<[ReceiptLine; 4]>,

    /// Total cost before any offers
    subtotal: Money<'static, Currency>,

    /// Total amount paid after offers
    total: Money<'static, Currency>,

    /// Currency used for all monetary values
    currency: &'static Currency,
}

impl Receipt {
    /// Build a receipt from recognised items and their quantities.
    pub fn from_lines<'c>(
        lines: impl IntoIterator<Item = RecognisedLine<'c>>,
        currency: &'static Currency,
    ) -> Self {
        let lines: SmallVec<[ReceiptLine; 4]> = lines
            .into_iter()
            .map(|(entry, quantity)| ReceiptLine::new(entry, quantity))
            .collect();

        let subtotal = sum(lines.iter().map(ReceiptLine::subtotal), currency);
        let total = sum(lines.iter().map(ReceiptLine::total), currency);

        Receipt {
            lines,
            subtotal,
            total,
            currency,
        }
    }

    /// Receipt lines, in order of first appearance in the basket.
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Total cost before any offers
    pub fn subtotal(&self) -> Money<'static, Currency> {
        self.subtotal
    }

    /// Total amount paid for all items
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }

    /// Amount saved by offers
    pub fn savings(&self) -> Money<'static, Currency> {
        difference(self.subtotal, self.total)
    }

    /// Currency used for all monetary values.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Writes the receipt as a table followed by the totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Qty", "Unit Price", "Offer", "Subtotal", "Savings", "Total"]);

        for line in &self.lines {
            builder.push_record([
                line.name.clone(),
                line.quantity.to_string(),
                line.unit_price.to_string(),
                line.offer.clone().unwrap_or_default(),
                line.subtotal.to_string(),
                line.savings().to_string(),
                line.total.to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..), Alignment::right());
        table.modify(Rows::first(), Alignment::left());

        writeln!(out, "\n{table}")?;
        writeln!(out, " Subtotal: {}", self.subtotal)?;
        writeln!(out, " Total:    {}", self.total)?;
        writeln!(out, " Savings:  {}", self.savings())?;

        Ok(())
    }
}

fn sum(
    amounts: impl Iterator<Item = Money<'static, Currency>>,
    currency: &'static Currency,
) -> Money<'static, Currency> {
    let minor = amounts
        .map(|amount| amount.to_minor_units())
        .fold(0_i64, i64::saturating_add);

    Money::from_minor(minor, currency)
}

fn difference(
    from: Money<'static, Currency>,
    amount: Money<'static, Currency>,
) -> Money<'static, Currency> {
    Money::from_minor(
        from.to_minor_units().saturating_sub(amount.to_minor_units()),
        from.currency(),
    )
}
