//! In-memory `ProfileStore` and a fixed-table `Scorer` used by unit and
//! behaviour tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::{Career, InterestScore, ProfileStore, ProfileStoreError, Scorer, UserProfile};

/// `ProfileStore` backed by a `RefCell`.
///
/// Counts saves so tests can assert that a command persisted exactly once.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profile: RefCell<Option<UserProfile>>,
    saves: Cell<usize>,
}

impl MemoryProfileStore {
    /// Create a store that already holds `profile`.
    #[must_use]
    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile: RefCell::new(Some(profile)),
            saves: Cell::new(0),
        }
    }

    /// Number of successful saves.
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load(&self) -> Result<UserProfile, ProfileStoreError> {
        Ok(self.profile.borrow().clone().unwrap_or_default())
    }

    fn save(&self, profile: &UserProfile) -> Result<(), ProfileStoreError> {
        *self.profile.borrow_mut() = Some(profile.clone());
        self.saves.set(self.saves.get().saturating_add(1));
        Ok(())
    }
}

/// `Scorer` returning a fixed score per career identifier, ignoring
/// interests. Unlisted careers score `0.0`.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    scores: HashMap<String, f64>,
}

impl FixedScorer {
    /// Set the score for a career while returning `self` for chaining.
    #[must_use]
    pub fn with_score(mut self, career_id: impl Into<String>, score: f64) -> Self {
        self.scores.insert(career_id.into(), score);
        self
    }
}

impl Scorer for FixedScorer {
    fn score(&self, career: &Career, _interests: &InterestScore) -> f64 {
        Self::sanitise(self.scores.get(&career.id).copied().unwrap_or(0.0))
    }
}
