//! Compiled-in catalogs used when no data files are configured.
//!
//! The constructors return `Result` because they go through the same
//! validating constructors as loaded data.

mod careers;
mod exams;
mod quiz;
mod rules;

pub use careers::careers;
pub use exams::entrance_exams;
pub use quiz::{OPTION_VALUE, quiz};
pub use rules::affinity_table;
