//! Affinity rules linking interest categories to careers.
#![forbid(unsafe_code)]

use std::collections::HashSet;
use std::io::{BufReader, Read};

use camino::Utf8Path;
use compass_core::{CareerCatalog, Category, InterestScore};
use compass_fs::open_utf8_file;
use serde::{Deserialize, Serialize};

use crate::{AffinityTableError, AffinityValidationError, RuleError, RuleIssue};

/// A weighted link from a category to a career.
///
/// A career may receive several rules for the same category, typically a
/// primary rule and a smaller bonus.
///
/// # Examples
/// ```
/// use compass_core::{Category, InterestScore};
/// use compass_scorer::AffinityRule;
///
/// # fn main() -> Result<(), compass_scorer::RuleError> {
/// let rule = AffinityRule::new(Category::Innovation, "software-developer", 0.5)?;
/// let interests = InterestScore::new().with_weight(Category::Innovation, 10);
/// assert_eq!(rule.contribution(&interests), 5.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRule", into = "RawRule")]
pub struct AffinityRule {
    category: Category,
    career_id: String,
    multiplier: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawRule {
    category: Category,
    career: String,
    multiplier: f64,
}

impl AffinityRule {
    /// Validate and construct a rule.
    ///
    /// # Errors
    /// Returns [`RuleError::InvalidMultiplier`] unless `multiplier` is finite
    /// and strictly positive, and [`RuleError::EmptyCareerId`] for a blank
    /// career.
    pub fn new(
        category: Category,
        career_id: impl Into<String>,
        multiplier: f64,
    ) -> Result<Self, RuleError> {
        let career = career_id.into();
        if career.trim().is_empty() {
            return Err(RuleError::EmptyCareerId { category });
        }
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(RuleError::InvalidMultiplier {
                category,
                career_id: career,
                multiplier,
            });
        }
        Ok(Self {
            category,
            career_id: career,
            multiplier,
        })
    }

    /// Category the rule reads.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Career the rule scores.
    #[must_use]
    pub fn career_id(&self) -> &str {
        &self.career_id
    }

    /// Weight multiplier.
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Score this rule adds for `interests`; an absent category adds zero.
    ///
    /// Weights convert to `f64` exactly, so a larger weight always yields a
    /// larger contribution.
    #[expect(
        clippy::float_arithmetic,
        reason = "affinity scoring multiplies integer weights by real multipliers"
    )]
    #[must_use]
    pub fn contribution(&self, interests: &InterestScore) -> f64 {
        f64::from(interests.weight_or_zero(self.category)) * self.multiplier
    }
}

impl TryFrom<RawRule> for AffinityRule {
    type Error = RuleError;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        Self::new(raw.category, raw.career, raw.multiplier)
    }
}

impl From<AffinityRule> for RawRule {
    fn from(rule: AffinityRule) -> Self {
        Self {
            category: rule.category,
            career: rule.career_id,
            multiplier: rule.multiplier,
        }
    }
}

/// The full set of affinity rules, in authoring order.
///
/// # Examples
/// ```
/// use compass_core::{Category, InterestScore};
/// use compass_scorer::{AffinityRule, AffinityTable};
///
/// # fn main() -> Result<(), compass_scorer::RuleError> {
/// let table = AffinityTable::new()
///     .with_rule(AffinityRule::new(Category::Analytical, "a", 1.0)?)
///     .with_rule(AffinityRule::new(Category::Innovation, "a", 0.5)?);
/// let interests = InterestScore::new()
///     .with_weight(Category::Analytical, 4)
///     .with_weight(Category::Innovation, 10);
/// assert_eq!(table.score("a", &interests), 9.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AffinityTable {
    rules: Vec<AffinityRule>,
}

impl AffinityTable {
    /// Construct an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a table from existing rules.
    #[must_use]
    pub const fn from_rules(rules: Vec<AffinityRule>) -> Self {
        Self { rules }
    }

    /// Append a rule.
    pub fn insert(&mut self, rule: AffinityRule) {
        self.rules.push(rule);
    }

    /// Append a rule while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_rule(mut self, rule: AffinityRule) -> Self {
        self.insert(rule);
        self
    }

    /// Iterate rules in authoring order.
    pub fn iter(&self) -> std::slice::Iter<'_, AffinityRule> {
        self.rules.iter()
    }

    /// Iterate the rules that score `career_id`.
    pub fn rules_for<'a>(&'a self, career_id: &'a str) -> impl Iterator<Item = &'a AffinityRule> {
        self.rules
            .iter()
            .filter(move |rule| rule.career_id == career_id)
    }

    /// Sum the contributions of every rule for `career_id`.
    ///
    /// Careers without rules score `0.0`. Sums too large for `f64` saturate
    /// at `f64::MAX`.
    #[expect(clippy::float_arithmetic, reason = "scores are sums of contributions")]
    #[must_use]
    pub fn score(&self, career_id: &str, interests: &InterestScore) -> f64 {
        let total = self
            .rules_for(career_id)
            .fold(0.0_f64, |total, rule| total + rule.contribution(interests));
        total.min(f64::MAX)
    }

    /// Number of rules.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rules.len()
    }

    /// Report whether the table has no rules.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check the table against a catalog.
    ///
    /// Reports rules naming careers absent from `catalog` and rules repeated
    /// verbatim. Scoring ignores such rules; this check exists so that
    /// configuration mistakes surface before deployment rather than as
    /// silently lower scores.
    ///
    /// # Errors
    /// Returns [`AffinityValidationError`] listing every issue found.
    pub fn validate(&self, catalog: &CareerCatalog) -> Result<(), AffinityValidationError> {
        let mut seen = HashSet::new();
        let mut issues = Vec::new();
        for rule in &self.rules {
            if !catalog.contains(&rule.career_id) {
                issues.push(RuleIssue::UnknownCareer {
                    category: rule.category,
                    career_id: rule.career_id.clone(),
                });
            }
            let key = (rule.category, rule.career_id.as_str(), rule.multiplier.to_bits());
            if !seen.insert(key) {
                issues.push(RuleIssue::DuplicateRule {
                    category: rule.category,
                    career_id: rule.career_id.clone(),
                    multiplier: rule.multiplier,
                });
            }
        }
        if issues.is_empty() {
            log::debug!("affinity table with {} rules is valid", self.rules.len());
            Ok(())
        } else {
            log::warn!("affinity table has {} invalid rules", issues.len());
            Err(AffinityValidationError { issues })
        }
    }

    /// Decode a table from a JSON array of
    /// `{"category", "career", "multiplier"}` objects.
    ///
    /// # Errors
    /// Returns the `serde_json` error for malformed JSON, unknown categories,
    /// or invalid rules.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

impl<'a> IntoIterator for &'a AffinityTable {
    type Item = &'a AffinityRule;
    type IntoIter = std::slice::Iter<'a, AffinityRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Load an affinity table from a JSON file.
///
/// # Errors
/// Returns [`AffinityTableError::Open`] when the file cannot be opened and
/// [`AffinityTableError::Parse`] when its contents are not a valid table.
pub fn load_affinity_table(path: &Utf8Path) -> Result<AffinityTable, AffinityTableError> {
    let file = open_utf8_file(path).map_err(|source| AffinityTableError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let table = AffinityTable::from_json_reader(BufReader::new(file)).map_err(|source| {
        AffinityTableError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    log::debug!("loaded {} affinity rules from {path}", table.len());
    Ok(table)
}
