//! Facade crate for the Compass career recommendation engine.
//!
//! This crate re-exports the core domain types and the affinity scorer, and
//! exposes the built-in catalog, quiz and rule data behind a feature flag.

#![forbid(unsafe_code)]

pub use compass_core::{
    Career, CareerCatalog, CareerFilter, CareerIcon, CareerScore, CatalogError, Category,
    InterestScore, ProfileStore, ProfileStoreError, Question, Quiz, QuizAnswers, QuizError,
    QuizOption, Scorer, UserProfile, rank_careers,
};

pub use compass_scorer::{
    AffinityRule, AffinityScorer, AffinityTable, DEFAULT_TOP_N, recommend, score_careers,
};

#[cfg(feature = "builtin-data")]
pub use compass_data::{EntranceExam, JsonProfileStore, builtin};
