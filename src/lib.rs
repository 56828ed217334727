//! Checkout
//!
//! Checkout prices a basket of item names against a catalog of unit prices and
//! "N for the price of M" offers, rejecting the whole basket if any item is not recognised.
//!
//! ```
//! use checkout::checkout::checkout;
//!
//! assert_eq!(
//!     checkout(&["apple", "apple", "orange"]),
//!     Ok(85),
//!     "the second apple is free"
//! );
//! ```

pub mod basket;
pub mod catalog;
pub mod checkout;
pub mod fixtures;
pub mod offers;
pub mod prelude;
pub mod receipt;
