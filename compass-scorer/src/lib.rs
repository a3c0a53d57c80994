//! Career recommendation scoring for Compass.
//!
//! A career's score is the sum, over every affinity rule targeting it, of
//! the user's interest weight in the rule's category times the rule's
//! multiplier. Careers are then ranked best first, equal scores keeping
//! catalog order, and truncated to the requested length.
//!
//! Scoring is pure and infallible. Rule tables are validated separately,
//! either when decoded (multipliers and categories) or on demand against a
//! catalog with [`AffinityTable::validate`].
//!
//! # Examples
//!
//! ```
//! use compass_core::{Career, CareerCatalog, Category, InterestScore};
//! use compass_scorer::{AffinityRule, AffinityTable, recommend};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = CareerCatalog::new(vec![
//!     Career::new("a", "A")?,
//!     Career::new("b", "B")?,
//!     Career::new("c", "C")?,
//! ])?;
//! let rules = AffinityTable::new()
//!     .with_rule(AffinityRule::new(Category::Analytical, "a", 1.0)?)
//!     .with_rule(AffinityRule::new(Category::Technical, "b", 1.0)?);
//! let interests = InterestScore::new()
//!     .with_weight(Category::Analytical, 10)
//!     .with_weight(Category::Technical, 3);
//! assert_eq!(recommend(&interests, &catalog, &rules, 2), ["a", "b"]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use compass_core::{CareerCatalog, CareerScore, InterestScore, rank};

mod affinity;
mod error;
mod rules;

pub use affinity::AffinityScorer;
pub use error::{AffinityTableError, AffinityValidationError, RuleError, RuleIssue};
pub use rules::{AffinityRule, AffinityTable, load_affinity_table};

/// Number of recommendations kept when the caller does not choose.
pub const DEFAULT_TOP_N: usize = 3;

/// Score every career in `careers`, in catalog order.
///
/// Careers without matching rules score `0.0`.
#[must_use]
pub fn score_careers(
    interests: &InterestScore,
    careers: &CareerCatalog,
    rules: &AffinityTable,
) -> Vec<CareerScore> {
    careers
        .iter()
        .map(|career| CareerScore::new(career.id.clone(), rules.score(&career.id, interests)))
        .collect()
}

/// Identifiers of the best `top_n` careers for `interests`.
///
/// Returns `min(top_n, careers.len())` identifiers. With no interests every
/// career scores zero, so the first `top_n` careers come back in catalog
/// order.
#[must_use]
pub fn recommend(
    interests: &InterestScore,
    careers: &CareerCatalog,
    rules: &AffinityTable,
    top_n: usize,
) -> Vec<String> {
    rank(score_careers(interests, careers, rules), top_n)
        .into_iter()
        .map(|scored| scored.career_id)
        .collect()
}
