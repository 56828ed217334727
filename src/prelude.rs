//! Checkout prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::Basket,
    catalog::{Catalog, CatalogEntry, CatalogError, Lookup},
    checkout::{CheckoutError, Partition, checkout, checkout_with, partition, price_basket},
    fixtures::{Fixture, FixtureError},
    offers::{Offer, OfferError},
    receipt::{Receipt, ReceiptError, ReceiptLine},
};
