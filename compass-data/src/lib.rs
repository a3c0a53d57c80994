//! Catalog data for the Compass engine.
//!
//! Responsibilities:
//! - Ship the built-in careers, quiz, affinity rules and entrance exams.
//! - Load replacement catalogs, quizzes and answers from JSON files.
//! - Persist user profiles as JSON through [`JsonProfileStore`].
//!
//! Boundaries:
//! - Scoring and validation rules live in `compass-core` and
//!   `compass-scorer`; this crate only supplies and stores data.

#![forbid(unsafe_code)]

pub mod builtin;
mod error;
mod exam;
mod json;
mod store;

pub use error::DataError;
pub use exam::EntranceExam;
pub use json::{load_answers, load_career_catalog, load_quiz};
pub use store::JsonProfileStore;
