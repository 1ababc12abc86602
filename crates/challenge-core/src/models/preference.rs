use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::product::ProductAttributes;
use super::standards::StandardsTier;

/// A customer's preferences as supplied by the host simulation.
///
/// Read-only to the engine. An empty affinity table or an empty preferred-trait
/// set is treated as neutral and contributes no bonus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceProfile {
    /// Category → affinity in [-1, 1].
    pub affinities: BTreeMap<String, f64>,
    /// Trait tags the customer wants to see on a product.
    pub preferred_traits: BTreeSet<String>,
    pub standards: StandardsTier,
}

impl PreferenceProfile {
    pub fn new(standards: StandardsTier) -> Self {
        Self {
            standards,
            ..Self::default()
        }
    }

    pub fn with_affinity(mut self, category: impl Into<String>, affinity: f64) -> Self {
        self.affinities.insert(category.into(), affinity);
        self
    }

    pub fn with_preferred_trait(mut self, tag: impl Into<String>) -> Self {
        self.preferred_traits.insert(tag.into());
        self
    }

    /// Whether the profile carries any affinity data at all.
    pub fn has_affinities(&self) -> bool {
        !self.affinities.is_empty()
    }

    /// Whether the profile names any preferred traits.
    pub fn has_preferred_traits(&self) -> bool {
        !self.preferred_traits.is_empty()
    }

    /// Affinity for `category`, clamped to [-1, 1]. Unknown categories are neutral.
    pub fn affinity(&self, category: &str) -> f64 {
        self.affinities
            .get(category)
            .copied()
            .filter(|a| a.is_finite())
            .map(|a| a.clamp(-1.0, 1.0))
            .unwrap_or(0.0)
    }

    /// Number of preferred traits present on `product`.
    pub fn trait_matches(&self, product: &ProductAttributes) -> usize {
        self.preferred_traits
            .iter()
            .filter(|tag| product.traits.contains(*tag))
            .count()
    }
}
