//! Rule-driven scoring of careers against quiz interests.
#![forbid(unsafe_code)]

use compass_core::{Career, CareerCatalog, CareerScore, InterestScore, Scorer, rank as rank_scores};

use crate::{AffinityTable, score_careers};

/// Scores careers by summing the affinity rules that target them.
///
/// Each rule contributes the interest weight of its category times its
/// multiplier. Rules naming careers outside the catalog being ranked never
/// contribute.
///
/// # Examples
/// ```
/// use compass_core::{Career, CareerCatalog, Category, InterestScore};
/// use compass_scorer::{AffinityRule, AffinityScorer, AffinityTable};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = CareerCatalog::new(vec![
///     Career::new("analyst", "Analyst")?,
///     Career::new("engineer", "Engineer")?,
/// ])?;
/// let table = AffinityTable::new()
///     .with_rule(AffinityRule::new(Category::Technical, "engineer", 1.0)?);
/// let interests = InterestScore::new().with_weight(Category::Technical, 5);
/// let top = AffinityScorer::new(table).recommend(&catalog, &interests, 1);
/// assert_eq!(top, ["engineer"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AffinityScorer {
    table: AffinityTable,
}

impl AffinityScorer {
    /// Wrap an affinity table.
    #[must_use]
    pub const fn new(table: AffinityTable) -> Self {
        Self { table }
    }

    /// Borrow the rules backing this scorer.
    #[must_use]
    pub const fn table(&self) -> &AffinityTable {
        &self.table
    }

    /// Score every career in `catalog` and keep the best `top_n`.
    ///
    /// Equal scores keep catalog order.
    #[must_use]
    pub fn rank(
        &self,
        catalog: &CareerCatalog,
        interests: &InterestScore,
        top_n: usize,
    ) -> Vec<CareerScore> {
        let ranked = rank_scores(score_careers(interests, catalog, &self.table), top_n);
        log::debug!(
            "ranked {} careers against {} interest categories, kept {}",
            catalog.len(),
            interests.len(),
            ranked.len()
        );
        ranked
    }

    /// Identifiers of the best `top_n` careers for `interests`.
    #[must_use]
    pub fn recommend(
        &self,
        catalog: &CareerCatalog,
        interests: &InterestScore,
        top_n: usize,
    ) -> Vec<String> {
        crate::recommend(interests, catalog, &self.table, top_n)
    }
}

impl Scorer for AffinityScorer {
    fn score(&self, career: &Career, interests: &InterestScore) -> f64 {
        <Self as Scorer>::sanitise(self.table.score(&career.id, interests))
    }
}
