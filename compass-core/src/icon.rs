//! Icon identifiers attached to careers and exams.
//!
//! Catalog records name their icon with a kebab-case string. Parsing maps the
//! name onto a closed set so a typo is a load-time error; presentation layers
//! then match on the variant instead of looking names up dynamically.

use std::str::FromStr;

/// Icon shown alongside a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum CareerIcon {
    /// Source code brackets.
    Code,
    /// Bar chart.
    BarChart,
    /// Page layout grid.
    Layout,
    /// Shield.
    Shield,
    /// Megaphone.
    Megaphone,
    /// Heart with a pulse line.
    HeartPulse,
    /// Briefcase; used when a record does not name an icon.
    #[default]
    Briefcase,
    /// Pen nib.
    PenTool,
    /// Award ribbon.
    Award,
    /// Activity trace.
    Activity,
    /// Balance scale.
    Scale,
    /// Lightning bolt.
    Zap,
    /// Open book.
    BookOpen,
}

impl CareerIcon {
    const ALL: [Self; 13] = [
        Self::Code,
        Self::BarChart,
        Self::Layout,
        Self::Shield,
        Self::Megaphone,
        Self::HeartPulse,
        Self::Briefcase,
        Self::PenTool,
        Self::Award,
        Self::Activity,
        Self::Scale,
        Self::Zap,
        Self::BookOpen,
    ];

    /// Return the kebab-case icon name.
    ///
    /// # Examples
    /// ```
    /// use compass_core::CareerIcon;
    ///
    /// assert_eq!(CareerIcon::HeartPulse.as_str(), "heart-pulse");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::BarChart => "bar-chart",
            Self::Layout => "layout",
            Self::Shield => "shield",
            Self::Megaphone => "megaphone",
            Self::HeartPulse => "heart-pulse",
            Self::Briefcase => "briefcase",
            Self::PenTool => "pen-tool",
            Self::Award => "award",
            Self::Activity => "activity",
            Self::Scale => "scale",
            Self::Zap => "zap",
            Self::BookOpen => "book-open",
        }
    }
}

impl std::fmt::Display for CareerIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an icon name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon '{name}'")]
pub struct UnknownIcon {
    /// The rejected input.
    pub name: String,
}

impl FromStr for CareerIcon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| UnknownIcon { name: s.to_owned() })
    }
}
