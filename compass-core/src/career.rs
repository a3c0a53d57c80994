//! Career records and the ordered catalog they live in.

use std::collections::HashSet;

use thiserror::Error;

use crate::{CareerFilter, CareerIcon, UserProfile};

/// A career that can be recommended.
///
/// Only `id` and `title` are required; the descriptive fields are free text
/// shown to the user and play no part in scoring.
///
/// # Examples
/// ```
/// use compass_core::{Career, CareerIcon};
///
/// # fn main() -> Result<(), compass_core::CatalogError> {
/// let career = Career::new("data-scientist", "Data Scientist")?
///     .with_icon(CareerIcon::BarChart);
/// assert_eq!(career.id, "data-scientist");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Career {
    /// Stable identifier, e.g. `software-developer`.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short description of the role.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Skills the role calls for.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills_required: Vec<String>,
    /// Typical salary as display text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub average_salary: String,
    /// Projected job growth as display text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub job_growth: String,
    /// Typical education route.
    #[cfg_attr(feature = "serde", serde(default))]
    pub education_required: String,
    /// Icon shown with the career.
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: CareerIcon,
}

impl Career {
    /// Construct a career with the required identifier and title.
    ///
    /// # Errors
    /// Returns [`CatalogError::EmptyId`] or [`CatalogError::EmptyTitle`] when
    /// either field is blank.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Result<Self, CatalogError> {
        let career = Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            skills_required: Vec::new(),
            average_salary: String::new(),
            job_growth: String::new(),
            education_required: String::new(),
            icon: CareerIcon::default(),
        };
        career.check()?;
        Ok(career)
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the required skills.
    #[must_use]
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills_required = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Set salary and growth outlook.
    #[must_use]
    pub fn with_outlook(
        mut self,
        average_salary: impl Into<String>,
        job_growth: impl Into<String>,
    ) -> Self {
        self.average_salary = average_salary.into();
        self.job_growth = job_growth.into();
        self
    }

    /// Set the education route.
    #[must_use]
    pub fn with_education(mut self, education_required: impl Into<String>) -> Self {
        self.education_required = education_required.into();
        self
    }

    /// Set the icon.
    #[must_use]
    pub const fn with_icon(mut self, icon: CareerIcon) -> Self {
        self.icon = icon;
        self
    }

    fn check(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

/// Errors raised while building a [`CareerCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A career had a blank identifier.
    #[error("career identifier must not be empty")]
    EmptyId,
    /// A career had a blank title.
    #[error("career '{id}' must have a title")]
    EmptyTitle {
        /// Identifier of the offending career.
        id: String,
    },
    /// Two careers shared an identifier.
    #[error("career '{id}' appears more than once in the catalog")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
}

/// Ordered collection of careers with unique identifiers.
///
/// Catalog order is significant: ranking breaks score ties by it.
///
/// # Examples
/// ```
/// use compass_core::{Career, CareerCatalog};
///
/// # fn main() -> Result<(), compass_core::CatalogError> {
/// let catalog = CareerCatalog::new(vec![
///     Career::new("a", "Alpha")?,
///     Career::new("b", "Beta")?,
/// ])?;
/// assert_eq!(catalog.ids().collect::<Vec<_>>(), ["a", "b"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Career>", into = "Vec<Career>")
)]
pub struct CareerCatalog {
    careers: Vec<Career>,
}

impl CareerCatalog {
    /// Validate and construct a catalog, preserving the given order.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when a career is missing required fields or
    /// an identifier repeats.
    pub fn new(careers: Vec<Career>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(careers.len());
        for career in &careers {
            career.check()?;
            if !seen.insert(career.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: career.id.clone(),
                });
            }
        }
        Ok(Self { careers })
    }

    /// Look up a career by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Career> {
        self.careers.iter().find(|career| career.id == id)
    }

    /// Report whether a career with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterate careers in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Career> {
        self.careers.iter()
    }

    /// Iterate identifiers in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.careers.iter().map(|career| career.id.as_str())
    }

    /// Careers passing `filter` for `profile`, in catalog order.
    #[must_use]
    pub fn search<'a>(&'a self, filter: &CareerFilter, profile: &UserProfile) -> Vec<&'a Career> {
        filter.apply(self, profile)
    }

    /// Number of careers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.careers.len()
    }

    /// Report whether the catalog is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}

impl TryFrom<Vec<Career>> for CareerCatalog {
    type Error = CatalogError;

    fn try_from(careers: Vec<Career>) -> Result<Self, Self::Error> {
        Self::new(careers)
    }
}

impl From<CareerCatalog> for Vec<Career> {
    fn from(catalog: CareerCatalog) -> Self {
        catalog.careers
    }
}

impl<'a> IntoIterator for &'a CareerCatalog {
    type Item = &'a Career;
    type IntoIter = std::slice::Iter<'a, Career>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn alpha() -> Career {
        Career::new("alpha", "Alpha").expect("valid career")
    }

    #[rstest]
    #[case("", "Title")]
    #[case("   ", "Title")]
    fn career_requires_id(#[case] id: &str, #[case] title: &str) {
        assert_eq!(Career::new(id, title), Err(CatalogError::EmptyId));
    }

    #[rstest]
    fn career_requires_title() {
        let err = Career::new("alpha", " ").expect_err("blank title");
        assert!(matches!(err, CatalogError::EmptyTitle { id } if id == "alpha"));
    }

    #[rstest]
    fn catalog_rejects_duplicate_ids(alpha: Career) {
        let err = CareerCatalog::new(vec![alpha.clone(), alpha]).expect_err("duplicate");
        assert_eq!(
            err,
            CatalogError::DuplicateId {
                id: "alpha".to_owned()
            }
        );
    }

    #[rstest]
    fn catalog_preserves_order_and_lookup(alpha: Career) {
        let beta = Career::new("beta", "Beta").expect("valid career");
        let catalog = CareerCatalog::new(vec![beta, alpha]).expect("valid catalog");
        assert_eq!(catalog.ids().collect::<Vec<_>>(), ["beta", "alpha"]);
        assert!(catalog.contains("alpha"));
        assert!(!catalog.contains("gamma"));
        assert_eq!(catalog.get("beta").map(|c| c.title.as_str()), Some("Beta"));
    }

    #[rstest]
    fn builders_fill_descriptive_fields(alpha: Career) {
        let career = alpha
            .with_description("Does things")
            .with_skills(["One", "Two"])
            .with_outlook("$1", "5%")
            .with_education("None")
            .with_icon(CareerIcon::Zap);
        assert_eq!(career.skills_required, ["One", "Two"]);
        assert_eq!(career.average_salary, "$1");
        assert_eq!(career.icon, CareerIcon::Zap);
    }
}
