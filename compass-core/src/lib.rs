//! Core domain types for the Compass career recommendation engine.
//!
//! These models validate on construction so downstream components can
//! trust them: catalogs reject duplicate identifiers, quizzes reject
//! malformed questions, and category or icon names outside the known set
//! fail to parse instead of silently matching nothing.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod career;
mod category;
mod filter;
mod icon;
mod interest;
mod profile;
mod quiz;
mod scorer;
mod store;
pub mod test_support;

pub use career::{Career, CareerCatalog, CatalogError};
pub use category::{Category, UnknownCategory};
pub use filter::CareerFilter;
pub use icon::{CareerIcon, UnknownIcon};
pub use interest::InterestScore;
pub use profile::UserProfile;
pub use quiz::{Question, Quiz, QuizAnswers, QuizError, QuizOption};
pub use scorer::{CareerScore, Scorer, rank, rank_careers};
pub use store::{CodecError, ProfileStore, ProfileStoreError};
