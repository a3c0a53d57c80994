//! Property-based tests for career ranking.
//!
//! # Invariants tested
//!
//! - **Length:** `recommend` returns `min(top_n, catalog size)` identifiers.
//! - **Determinism:** identical inputs give identical ordered output.
//! - **Empty interests:** the output is the catalog prefix.
//! - **Monotonicity:** raising a category's weight raises the score of a
//!   career it targets and never lowers that career's rank.

use compass_core::{Career, CareerCatalog, Category, InterestScore};
use compass_scorer::{AffinityRule, AffinityTable, recommend, score_careers};
use proptest::prelude::*;

fn catalog_of(size: usize) -> CareerCatalog {
    let careers = (0..size)
        .map(|index| {
            let id = format!("career-{index}");
            Career::new(id.clone(), id).expect("generated career is valid")
        })
        .collect();
    CareerCatalog::new(careers).expect("generated ids are unique")
}

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn interests() -> impl Strategy<Value = InterestScore> {
    let weight = prop_oneof![0_u32..=100, (u32::MAX - 1_000)..=(u32::MAX - 50)];
    prop::collection::vec((category(), weight), 0..8)
        .prop_map(|weights| weights.into_iter().collect::<InterestScore>())
}

/// A catalog together with rules that only name careers inside it.
fn catalog_and_rules() -> impl Strategy<Value = (CareerCatalog, AffinityTable)> {
    (1_usize..8).prop_flat_map(|size| {
        let rule = (category(), 0..size, 0.1_f64..5.0_f64);
        prop::collection::vec(rule, 0..20).prop_map(move |raw| {
            let rules = raw
                .into_iter()
                .map(|(category, index, multiplier)| {
                    AffinityRule::new(category, format!("career-{index}"), multiplier)
                        .expect("generated rule is valid")
                })
                .collect();
            (catalog_of(size), AffinityTable::from_rules(rules))
        })
    })
}

fn position(ranked: &[String], career_id: &str) -> Option<usize> {
    ranked.iter().position(|id| id == career_id)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the result is as long as the catalog allows.
    #[test]
    fn result_length_is_min_of_top_n_and_catalog(
        (catalog, rules) in catalog_and_rules(),
        interests in interests(),
        top_n in 0_usize..12,
    ) {
        let top = recommend(&interests, &catalog, &rules, top_n);
        prop_assert_eq!(top.len(), top_n.min(catalog.len()));
    }

    /// Property: repeated calls agree exactly.
    #[test]
    fn recommend_is_deterministic(
        (catalog, rules) in catalog_and_rules(),
        interests in interests(),
        top_n in 0_usize..12,
    ) {
        let first = recommend(&interests, &catalog, &rules, top_n);
        let second = recommend(&interests, &catalog, &rules, top_n);
        prop_assert_eq!(first, second);
    }

    /// Property: without interests every career ties and catalog order wins.
    #[test]
    fn empty_interests_return_catalog_prefix(
        (catalog, rules) in catalog_and_rules(),
        top_n in 0_usize..12,
    ) {
        let top = recommend(&InterestScore::new(), &catalog, &rules, top_n);
        let prefix: Vec<String> = catalog.ids().take(top_n).map(str::to_owned).collect();
        prop_assert_eq!(top, prefix);
    }

    /// Property: boosting a category lifts the career it targets.
    ///
    /// Other rules on the boosted category are dropped so only the target
    /// career gains from the boost.
    #[test]
    fn raising_a_weight_never_lowers_a_targeted_career(
        (catalog, rules) in catalog_and_rules(),
        interests in interests(),
        boosted in category(),
        target_index in 0_usize..8,
        boost in 1_u32..=50,
    ) {
        let target = format!("career-{}", target_index % catalog.len());
        let mut focused = AffinityTable::new()
            .with_rule(AffinityRule::new(boosted, target.clone(), 1.0).expect("valid rule"));
        for rule in rules
            .iter()
            .filter(|rule| rule.category() != boosted || rule.career_id() == target)
        {
            focused.insert(rule.clone());
        }
        let current = interests.weight_or_zero(boosted);
        let raised = interests.clone().with_weight(boosted, current + boost);

        let score_of = |scores: &[compass_core::CareerScore]| {
            scores
                .iter()
                .find(|scored| scored.career_id == target)
                .map(|scored| scored.score)
                .expect("target is in the catalog")
        };
        let before_score = score_of(&score_careers(&interests, &catalog, &focused));
        let after_score = score_of(&score_careers(&raised, &catalog, &focused));
        prop_assert!(after_score > before_score);

        let everything = catalog.len();
        let before = recommend(&interests, &catalog, &focused, everything);
        let after = recommend(&raised, &catalog, &focused, everything);
        prop_assert!(position(&after, &target) <= position(&before, &target));
    }
}
