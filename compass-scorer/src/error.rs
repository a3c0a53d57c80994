//! Error types raised while building, loading, or validating affinity rules.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use compass_core::Category;
use thiserror::Error;

/// Errors raised when constructing a single [`AffinityRule`](crate::AffinityRule).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    /// The multiplier was zero, negative, or not finite.
    #[error("multiplier {multiplier} for {category} -> '{career_id}' must be finite and positive")]
    InvalidMultiplier {
        /// Category of the rejected rule.
        category: Category,
        /// Career of the rejected rule.
        career_id: String,
        /// The rejected multiplier.
        multiplier: f64,
    },
    /// The career identifier was blank.
    #[error("rule for {category} must name a career")]
    EmptyCareerId {
        /// Category of the rejected rule.
        category: Category,
    },
}

/// Errors raised while loading an affinity table from disk.
#[derive(Debug, Error)]
pub enum AffinityTableError {
    /// Opening the rule file failed.
    #[error("failed to open affinity rules at {path}")]
    Open {
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Decoding the rule file failed, including invalid rules.
    #[error("failed to parse affinity rules at {path}")]
    Parse {
        /// Requested path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// A configuration-integrity problem with one rule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleIssue {
    /// The rule names a career the catalog does not contain.
    #[error("{category} -> '{career_id}' names a career missing from the catalog")]
    UnknownCareer {
        /// Category of the rule.
        category: Category,
        /// The unknown career.
        career_id: String,
    },
    /// The same rule appears more than once.
    #[error("{category} -> '{career_id}' x {multiplier} is listed more than once")]
    DuplicateRule {
        /// Category of the rule.
        category: Category,
        /// Career of the rule.
        career_id: String,
        /// Multiplier shared by the duplicates.
        multiplier: f64,
    },
}

/// Every integrity problem found by
/// [`AffinityTable::validate`](crate::AffinityTable::validate).
#[derive(Debug, Clone, PartialEq, Error)]
#[error("affinity table has {} invalid rule(s): {}", .issues.len(), render_issues(.issues))]
pub struct AffinityValidationError {
    /// Problems in table order.
    pub issues: Vec<RuleIssue>,
}

fn render_issues(issues: &[RuleIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
