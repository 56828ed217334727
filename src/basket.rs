//! Basket

/// Item names scanned at the till, in scan order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Basket {
    items: Vec<String>,
}

impl Basket {
    /// Create an empty basket.
    #[must_use]
    pub fn new() -> Self {
        Basket { items: Vec::new() }
    }

    /// Create a new basket with the given item names.
    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Basket {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Add an item name to the end of the basket.
    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Get an item name by its position in the basket.
    pub fn get_item(&self, item: usize) -> Option<&str> {
        self.items.get(item).map(String::as_str)
    }

    /// Iterate over the item names in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Get the number of items in the basket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Basket {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Basket::with_items(iter)
    }
}
