//! Interest categories accumulated from quiz answers.
//!
//! The enum replaces free-form category strings so an unknown category in a
//! quiz, rule table, or profile is rejected when the data is loaded rather
//! than silently scoring zero.
//!
//! # Examples
//! ```
//! use compass_core::Category;
//!
//! assert_eq!(Category::Analytical.as_str(), "analytical");
//! assert_eq!(Category::Ai.to_string(), "ai");
//! ```

/// A named dimension of aptitude or preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Category {
    /// Problem solving, puzzles, data and research.
    Analytical,
    /// Visual design and idea generation.
    Creative,
    /// Helping, teaching and collaborating with others.
    People,
    /// Building, fixing and engineering things.
    Technical,
    /// Planning and coordinating a group.
    Leadership,
    /// Comfort with fast-paced, changing priorities.
    Adaptability,
    /// Preference for structure and clear expectations.
    Organization,
    /// Preference for independent, focused work.
    Autonomy,
    /// Learning by doing.
    Practical,
    /// Learning by watching demonstrations.
    Observational,
    /// Pride in inventing new solutions.
    Innovation,
    /// Pride in expert recognition.
    Mastery,
    /// Pride in improving people's lives.
    Impact,
    /// Pride in building something tangible.
    Creation,
    /// Artificial intelligence and machine learning.
    Ai,
    /// Virtual and augmented reality.
    Immersive,
    /// Clean energy and sustainability.
    Environmental,
    /// Cybersecurity and privacy.
    Security,
}

impl Category {
    /// Every category in declaration order.
    pub const ALL: [Self; 18] = [
        Self::Analytical,
        Self::Creative,
        Self::People,
        Self::Technical,
        Self::Leadership,
        Self::Adaptability,
        Self::Organization,
        Self::Autonomy,
        Self::Practical,
        Self::Observational,
        Self::Innovation,
        Self::Mastery,
        Self::Impact,
        Self::Creation,
        Self::Ai,
        Self::Immersive,
        Self::Environmental,
        Self::Security,
    ];

    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use compass_core::Category;
    ///
    /// assert_eq!(Category::Security.as_str(), "security");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Analytical => "analytical",
            Self::Creative => "creative",
            Self::People => "people",
            Self::Technical => "technical",
            Self::Leadership => "leadership",
            Self::Adaptability => "adaptability",
            Self::Organization => "organization",
            Self::Autonomy => "autonomy",
            Self::Practical => "practical",
            Self::Observational => "observational",
            Self::Innovation => "innovation",
            Self::Mastery => "mastery",
            Self::Impact => "impact",
            Self::Creation => "creation",
            Self::Ai => "ai",
            Self::Immersive => "immersive",
            Self::Environmental => "environmental",
            Self::Security => "security",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown interest category '{name}'")]
pub struct UnknownCategory {
    /// The rejected input.
    pub name: String,
}

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| UnknownCategory { name: s.to_owned() })
    }
}
