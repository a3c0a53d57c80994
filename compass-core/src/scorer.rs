//! Score careers against a user's interests and rank them.
//!
//! The `Scorer` trait assigns a match score to a [`Career`] given an
//! [`InterestScore`]. [`rank_careers`] turns any scorer into an ordered
//! top-N list.

use crate::{Career, CareerCatalog, InterestScore};

/// Calculate a match score for a career.
///
/// Higher scores indicate a better match. Implementations must be pure and
/// thread-safe (`Send` + `Sync`) and must return `0.0` when nothing about
/// the interests applies to the career.
///
/// Implementations must produce finite, non-negative scores. Use
/// [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use compass_core::{Career, InterestScore, Scorer};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn score(&self, _career: &Career, _interests: &InterestScore) -> f64 {
///         1.0
///     }
/// }
///
/// # fn main() -> Result<(), compass_core::CatalogError> {
/// let career = Career::new("nurse", "Nurse")?;
/// assert_eq!(UnitScorer.score(&career, &InterestScore::new()), 1.0);
/// # Ok(())
/// # }
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `career` according to `interests`.
    fn score(&self, career: &Career, interests: &InterestScore) -> f64;

    /// Map `NaN` to `0.0`, floor negatives at `0.0` and saturate positive
    /// infinity at `f64::MAX`.
    ///
    /// Saturating keeps an overflowing score ranked first instead of last.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if score.is_nan() {
            return 0.0;
        }
        score.clamp(0.0, f64::MAX)
    }
}

/// A career identifier paired with its accumulated score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CareerScore {
    /// Identifier of the scored career.
    pub career_id: String,
    /// Accumulated match score.
    pub score: f64,
}

impl CareerScore {
    /// Pair a career identifier with a score.
    #[must_use]
    pub fn new(career_id: impl Into<String>, score: f64) -> Self {
        Self {
            career_id: career_id.into(),
            score,
        }
    }
}

/// Order scores best first, keeping the incoming order for ties, and keep
/// at most `top_n`.
///
/// The sort is stable: callers pass scores in catalog order so equal scores
/// keep catalog order.
#[must_use]
pub fn rank(mut scores: Vec<CareerScore>, top_n: usize) -> Vec<CareerScore> {
    scores.sort_by(|left, right| right.score.total_cmp(&left.score));
    scores.truncate(top_n);
    scores
}

/// Score every career in `catalog` with `scorer` and return the best
/// `top_n`, ties broken by catalog order.
///
/// # Examples
/// ```
/// use compass_core::{Career, CareerCatalog, InterestScore, Scorer, rank_careers};
///
/// struct TitleLength;
///
/// impl Scorer for TitleLength {
///     fn score(&self, career: &Career, _interests: &InterestScore) -> f64 {
///         career.title.len() as f64
///     }
/// }
///
/// # fn main() -> Result<(), compass_core::CatalogError> {
/// let catalog = CareerCatalog::new(vec![
///     Career::new("a", "Ab")?,
///     Career::new("b", "Abcd")?,
/// ])?;
/// let ranked = rank_careers(&TitleLength, &catalog, &InterestScore::new(), 1);
/// assert_eq!(ranked[0].career_id, "b");
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn rank_careers<S>(
    scorer: &S,
    catalog: &CareerCatalog,
    interests: &InterestScore,
    top_n: usize,
) -> Vec<CareerScore>
where
    S: Scorer + ?Sized,
{
    let scores = catalog
        .iter()
        .map(|career| CareerScore::new(career.id.clone(), scorer.score(career, interests)))
        .collect();
    rank(scores, top_n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Zero;

    impl Scorer for Zero {
        fn score(&self, _career: &Career, _interests: &InterestScore) -> f64 {
            0.0
        }
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(f64::INFINITY, f64::MAX)]
    #[case(f64::NEG_INFINITY, 0.0)]
    #[case(-1.5, 0.0)]
    #[case(12.5, 12.5)]
    fn sanitise_filters_invalid_scores(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(Zero::sanitise(input), expected);
    }

    #[rstest]
    fn rank_is_stable_for_ties() {
        let ranked = rank(
            vec![
                CareerScore::new("a", 1.0),
                CareerScore::new("b", 2.0),
                CareerScore::new("c", 1.0),
                CareerScore::new("d", 2.0),
            ],
            4,
        );
        let ids: Vec<_> = ranked.iter().map(|s| s.career_id.as_str()).collect();
        assert_eq!(ids, ["b", "d", "a", "c"]);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(2, 2)]
    #[case(10, 3)]
    fn rank_truncates(#[case] top_n: usize, #[case] expected: usize) {
        let scores = vec![
            CareerScore::new("a", 0.0),
            CareerScore::new("b", 0.0),
            CareerScore::new("c", 0.0),
        ];
        assert_eq!(rank(scores, top_n).len(), expected);
    }

    #[rstest]
    fn zero_scorer_keeps_catalog_order() {
        let catalog = CareerCatalog::new(vec![
            Career::new("x", "X").expect("career"),
            Career::new("y", "Y").expect("career"),
        ])
        .expect("catalog");
        let ranked = rank_careers(&Zero, &catalog, &InterestScore::new(), 5);
        let ids: Vec<_> = ranked.iter().map(|s| s.career_id.as_str()).collect();
        assert_eq!(ids, ["x", "y"]);
    }
}
