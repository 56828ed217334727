//! Offers

use std::fmt;

use thiserror::Error;

/// Errors raised when constructing an offer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OfferError {
    /// A bundle must contain at least one unit.
    #[error("offer bundle size must be at least 1")]
    EmptyBundle,

    /// Free units must be fewer than the bundle size (free count, bundle size).
    #[error("offer gives {0} units free in a bundle of {1}; must be fewer than the bundle size")]
    TooManyFree(usize, usize),
}

/// "Buy `bundle_size`, pay for `bundle_size - free_count`" offer.
///
/// Every complete bundle is charged for its non-free units only, any remainder
/// smaller than a bundle is charged in full.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Offer {
    bundle_size: usize,
    free_count: usize,
}

impl Offer {
    /// Buy two, pay for one.
    pub const TWO_FOR_ONE: Offer = Offer {
        bundle_size: 2,
        free_count: 1,
    };

    /// Buy three, pay for two.
    pub const THREE_FOR_TWO: Offer = Offer {
        bundle_size: 3,
        free_count: 1,
    };

    /// Creates a new offer.
    ///
    /// # Errors
    ///
    /// - [`OfferError::EmptyBundle`]: `bundle_size` is zero.
    /// - [`OfferError::TooManyFree`]: `free_count` is not below `bundle_size`.
    pub fn new(bundle_size: usize, free_count: usize) -> Result<Self, OfferError> {
        if bundle_size == 0 {
            return Err(OfferError::EmptyBundle);
        }

        if free_count >= bundle_size {
            return Err(OfferError::TooManyFree(free_count, bundle_size));
        }

        Ok(Self {
            bundle_size,
            free_count,
        })
    }

    /// "Buy `bundle_size`, pay for `pay_for`", e.g. `buy_pay(3, 2)` is three for two.
    ///
    /// # Errors
    ///
    /// Returns an [`OfferError`] if the resulting offer is degenerate.
    pub fn buy_pay(bundle_size: usize, pay_for: usize) -> Result<Self, OfferError> {
        let free_count = bundle_size
            .checked_sub(pay_for)
            .ok_or(OfferError::TooManyFree(0, bundle_size))?;

        Self::new(bundle_size, free_count)
    }

    /// Number of units in a complete bundle.
    pub fn bundle_size(&self) -> usize {
        self.bundle_size
    }

    /// Number of units in each complete bundle that are free.
    pub fn free_count(&self) -> usize {
        self.free_count
    }

    /// Number of units that are charged for within each complete bundle.
    pub fn paid_per_bundle(&self) -> usize {
        self.bundle_size - self.free_count
    }

    /// Number of units charged at unit price when buying `quantity` units.
    pub fn chargeable_units(&self, quantity: usize) -> usize {
        let bundles = quantity / self.bundle_size;
        let remainder = quantity % self.bundle_size;

        bundles * self.paid_per_bundle() + remainder
    }
}

impl fmt::Display for Offer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {}", self.bundle_size, self.paid_per_bundle())
    }
}
