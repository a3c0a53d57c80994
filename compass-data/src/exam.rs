//! Entrance examinations offered alongside career recommendations.

use compass_core::CareerIcon;
use serde::{Deserialize, Serialize};

/// A national entrance examination and the fields of study it opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntranceExam {
    /// Stable identifier, e.g. `jee-main`.
    pub id: String,
    /// Short name.
    pub name: String,
    /// Expanded name.
    pub full_name: String,
    /// What the exam admits candidates to.
    pub description: String,
    /// Fields of study the exam leads into.
    pub fields: Vec<String>,
    /// Icon shown with the exam.
    #[serde(default)]
    pub icon: CareerIcon,
}

impl EntranceExam {
    /// Report whether the exam leads into `field`, ignoring case.
    #[must_use]
    pub fn covers(&self, field: &str) -> bool {
        self.fields
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(field))
    }
}
