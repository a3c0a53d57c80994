//! Interest scores: accumulated per-category weights from quiz answers.
//!
//! Categories that no answer touched are absent rather than zero. Scorers
//! treat an absent category as contributing nothing.

use std::collections::BTreeMap;

use crate::Category;

/// Accumulated interest weight per category.
///
/// Values are built once per completed quiz and then only read or merged.
///
/// # Examples
/// ```
/// use compass_core::{Category, InterestScore};
///
/// let interests = InterestScore::new()
///     .with_weight(Category::Analytical, 10)
///     .with_weight(Category::Technical, 3);
/// assert_eq!(interests.weight(Category::Analytical), Some(10));
/// assert!(interests.weight(Category::Creative).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct InterestScore {
    weights: BTreeMap<Category, u32>,
}

impl InterestScore {
    /// Construct an empty score.
    ///
    /// # Examples
    /// ```
    /// use compass_core::InterestScore;
    ///
    /// assert!(InterestScore::new().is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the weight for a category, if any answer contributed to it.
    #[must_use]
    pub fn weight(&self, category: Category) -> Option<u32> {
        self.weights.get(&category).copied()
    }

    /// Return the weight for a category, treating absence as zero.
    #[must_use]
    pub fn weight_or_zero(&self, category: Category) -> u32 {
        self.weight(category).unwrap_or(0)
    }

    /// Set a category weight while returning `self` for chaining.
    #[must_use]
    pub fn with_weight(mut self, category: Category, weight: u32) -> Self {
        self.weights.insert(category, weight);
        self
    }

    /// Add `value` to a category, creating it when absent.
    pub(crate) fn accumulate(&mut self, category: Category, value: u32) {
        let entry = self.weights.entry(category).or_insert(0);
        *entry = entry.saturating_add(value);
    }

    /// Return a new score with `newer` layered over `self`.
    ///
    /// Categories present in `newer` replace those in `self`; the rest are
    /// kept. This is how a fresh quiz result folds into a stored profile.
    ///
    /// # Examples
    /// ```
    /// use compass_core::{Category, InterestScore};
    ///
    /// let stored = InterestScore::new()
    ///     .with_weight(Category::People, 5)
    ///     .with_weight(Category::Creative, 10);
    /// let fresh = InterestScore::new().with_weight(Category::Creative, 15);
    /// let merged = stored.merged(&fresh);
    /// assert_eq!(merged.weight(Category::People), Some(5));
    /// assert_eq!(merged.weight(Category::Creative), Some(15));
    /// ```
    #[must_use]
    pub fn merged(&self, newer: &Self) -> Self {
        let mut weights = self.weights.clone();
        weights.extend(newer.weights.iter().map(|(k, v)| (*k, *v)));
        Self { weights }
    }

    /// Iterate categories and weights in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.weights.iter().map(|(category, weight)| (*category, *weight))
    }

    /// Number of categories present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Report whether no category is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl FromIterator<(Category, u32)> for InterestScore {
    fn from_iter<I: IntoIterator<Item = (Category, u32)>>(iter: I) -> Self {
        let mut score = Self::new();
        for (category, value) in iter {
            score.accumulate(category, value);
        }
        score
    }
}
