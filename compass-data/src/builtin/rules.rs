//! The compiled-in affinity table.

use compass_core::Category;
use compass_scorer::{AffinityRule, AffinityTable, RuleError};

/// Primary rules first, then the smaller bonus rules.
const RULES: [(Category, &str, f64); 10] = [
    (Category::Analytical, "data-scientist", 1.0),
    (Category::Technical, "software-developer", 1.0),
    (Category::Creative, "ux-designer", 1.0),
    (Category::Security, "cybersecurity-analyst", 1.0),
    (Category::People, "marketing-specialist", 1.0),
    (Category::Leadership, "healthcare-administrator", 1.0),
    (Category::Innovation, "software-developer", 0.5),
    (Category::Innovation, "ux-designer", 0.7),
    (Category::Analytical, "cybersecurity-analyst", 0.6),
    (Category::Ai, "data-scientist", 0.8),
];

/// Build the default rule table used when no rule file is configured.
///
/// # Errors
/// Returns [`RuleError`] if a compiled-in rule is invalid.
pub fn affinity_table() -> Result<AffinityTable, RuleError> {
    RULES
        .iter()
        .map(|(category, career, multiplier)| AffinityRule::new(*category, *career, *multiplier))
        .collect::<Result<Vec<_>, _>>()
        .map(AffinityTable::from_rules)
}
