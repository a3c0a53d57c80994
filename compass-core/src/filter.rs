//! Narrow a career catalog by free text and by the user's own lists.

use crate::{Career, CareerCatalog, UserProfile};

/// Criteria for browsing a [`CareerCatalog`].
///
/// Every criterion that is set must hold. The default filter keeps every
/// career.
///
/// # Examples
/// ```
/// use compass_core::{Career, CareerCatalog, CareerFilter, UserProfile};
///
/// # fn main() -> Result<(), compass_core::CatalogError> {
/// let catalog = CareerCatalog::new(vec![
///     Career::new("nurse", "Nurse")?.with_description("Cares for patients"),
///     Career::new("chef", "Chef")?,
/// ])?;
/// let mut profile = UserProfile::new();
/// profile.save_career("chef");
///
/// let found = CareerFilter::new().with_search("PATIENT").apply(&catalog, &profile);
/// assert_eq!(found.first().map(|career| career.id.as_str()), Some("nurse"));
///
/// let saved = CareerFilter::new().saved_only().apply(&catalog, &profile);
/// assert_eq!(saved.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CareerFilter {
    search: Option<String>,
    saved_only: bool,
    recommended_only: bool,
}

impl CareerFilter {
    /// A filter that keeps every career.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep careers whose title or description contains `term`, ignoring
    /// case. A blank term matches everything.
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        let term = text.into().to_lowercase();
        self.search = if term.trim().is_empty() {
            None
        } else {
            Some(term)
        };
        self
    }

    /// Keep only careers the user bookmarked.
    #[must_use]
    pub const fn saved_only(mut self) -> Self {
        self.saved_only = true;
        self
    }

    /// Keep only careers recommended by the user's last quiz.
    #[must_use]
    pub const fn recommended_only(mut self) -> Self {
        self.recommended_only = true;
        self
    }

    /// Whether the filter reads the profile's saved or recommended lists.
    #[must_use]
    pub const fn needs_profile(&self) -> bool {
        self.saved_only || self.recommended_only
    }

    /// Report whether `career` passes every criterion.
    #[must_use]
    pub fn matches(&self, career: &Career, profile: &UserProfile) -> bool {
        let text_matches = self.search.as_deref().is_none_or(|term| {
            career.title.to_lowercase().contains(term)
                || career.description.to_lowercase().contains(term)
        });
        let saved = !self.saved_only || profile.is_career_saved(&career.id);
        let recommended = !self.recommended_only
            || profile
                .recommended_careers()
                .iter()
                .any(|id| id == &career.id);
        text_matches && saved && recommended
    }

    /// Careers in `catalog` passing the filter, in catalog order.
    #[must_use]
    pub fn apply<'a>(&self, catalog: &'a CareerCatalog, profile: &UserProfile) -> Vec<&'a Career> {
        catalog
            .iter()
            .filter(|career| self.matches(career, profile))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> CareerCatalog {
        CareerCatalog::new(vec![
            Career::new("software-developer", "Software Developer")
                .expect("career")
                .with_description("Builds applications and systems"),
            Career::new("data-scientist", "Data Scientist")
                .expect("career")
                .with_description("Analyzes complex data"),
            Career::new("ux-designer", "UX Designer")
                .expect("career")
                .with_description("Designs software experiences"),
        ])
        .expect("catalog")
    }

    #[fixture]
    fn profile() -> UserProfile {
        let mut profile = UserProfile::new();
        profile.save_career("ux-designer");
        profile.save_career("data-scientist");
        profile.update_recommended_careers(vec![
            "data-scientist".to_owned(),
            "software-developer".to_owned(),
        ]);
        profile
    }

    fn ids<'a>(careers: &[&'a Career]) -> Vec<&'a str> {
        careers.iter().map(|career| career.id.as_str()).collect()
    }

    #[rstest]
    #[case(CareerFilter::new(), &["software-developer", "data-scientist", "ux-designer"])]
    #[case(CareerFilter::new().with_search("software"), &["software-developer", "ux-designer"])]
    #[case(CareerFilter::new().with_search("DATA"), &["data-scientist"])]
    #[case(CareerFilter::new().with_search("   "), &["software-developer", "data-scientist", "ux-designer"])]
    #[case(CareerFilter::new().with_search("astronaut"), &[])]
    #[case(CareerFilter::new().saved_only(), &["data-scientist", "ux-designer"])]
    #[case(CareerFilter::new().recommended_only(), &["software-developer", "data-scientist"])]
    #[case(CareerFilter::new().saved_only().recommended_only(), &["data-scientist"])]
    #[case(CareerFilter::new().with_search("design").saved_only(), &["ux-designer"])]
    fn filters_keep_catalog_order(
        catalog: CareerCatalog,
        profile: UserProfile,
        #[case] filter: CareerFilter,
        #[case] expected: &[&str],
    ) {
        assert_eq!(ids(&filter.apply(&catalog, &profile)), expected);
    }

    #[rstest]
    fn profile_lists_need_a_profile() {
        assert!(!CareerFilter::new().with_search("data").needs_profile());
        assert!(CareerFilter::new().saved_only().needs_profile());
        assert!(CareerFilter::new().recommended_only().needs_profile());
    }
}
