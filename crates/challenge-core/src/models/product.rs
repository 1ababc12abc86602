use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Attributes of a product being scored. Read-only input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductAttributes {
    /// Category tag, matched against the profile's affinity table.
    pub category: String,
    pub traits: BTreeSet<String>,
    pub price: f64,
    pub market_value: f64,
}

impl ProductAttributes {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn with_trait(mut self, tag: impl Into<String>) -> Self {
        self.traits.insert(tag.into());
        self
    }

    pub fn with_pricing(mut self, price: f64, market_value: f64) -> Self {
        self.price = price;
        self.market_value = market_value;
        self
    }

    /// Asking price relative to market value. `None` when market value is not positive.
    pub fn price_ratio(&self) -> Option<f64> {
        (self.market_value > 0.0).then(|| self.price / self.market_value)
    }
}
