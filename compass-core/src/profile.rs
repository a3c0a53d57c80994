//! User profiles: interests, recommendations and bookmarks kept between
//! quiz runs.
//!
//! All mutation goes through the methods below. Persistence is the job of a
//! [`ProfileStore`](crate::ProfileStore); nothing here performs I/O.

use std::collections::BTreeMap;

use crate::InterestScore;

/// Long-lived state for one user.
///
/// # Examples
/// ```
/// use compass_core::{Category, InterestScore, UserProfile};
///
/// let mut profile = UserProfile::new();
/// profile.complete_assessment(
///     &InterestScore::new().with_weight(Category::Technical, 10),
///     vec!["software-developer".to_owned()],
/// );
/// assert!(profile.assessment_completed());
/// assert_eq!(profile.recommended_careers(), ["software-developer"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UserProfile {
    assessment_completed: bool,
    interests: InterestScore,
    saved_careers: Vec<String>,
    saved_courses: Vec<String>,
    recommended_careers: Vec<String>,
    skills_rating: BTreeMap<String, u32>,
    exam_type: Option<String>,
    exam_score: Option<String>,
    preferences: Vec<String>,
    strengths: Vec<String>,
}

impl UserProfile {
    /// Construct an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the user has finished the quiz.
    #[must_use]
    pub const fn assessment_completed(&self) -> bool {
        self.assessment_completed
    }

    /// Accumulated interests.
    #[must_use]
    pub const fn interests(&self) -> &InterestScore {
        &self.interests
    }

    /// Bookmarked career identifiers in the order they were saved.
    #[must_use]
    pub fn saved_careers(&self) -> &[String] {
        &self.saved_careers
    }

    /// Bookmarked course identifiers in the order they were saved.
    #[must_use]
    pub fn saved_courses(&self) -> &[String] {
        &self.saved_courses
    }

    /// Most recent ranked recommendation.
    #[must_use]
    pub fn recommended_careers(&self) -> &[String] {
        &self.recommended_careers
    }

    /// Self-rated skills.
    #[must_use]
    pub const fn skills_rating(&self) -> &BTreeMap<String, u32> {
        &self.skills_rating
    }

    /// Entrance exam the user is preparing for.
    #[must_use]
    pub fn exam_type(&self) -> Option<&str> {
        self.exam_type.as_deref()
    }

    /// Score the user reported for their exam.
    #[must_use]
    pub fn exam_score(&self) -> Option<&str> {
        self.exam_score.as_deref()
    }

    /// Stated study or work preferences.
    #[must_use]
    pub fn preferences(&self) -> &[String] {
        &self.preferences
    }

    /// Stated strengths.
    #[must_use]
    pub fn strengths(&self) -> &[String] {
        &self.strengths
    }

    /// Fold fresh interests into the stored ones.
    pub fn update_interests(&mut self, interests: &InterestScore) {
        self.interests = self.interests.merged(interests);
    }

    /// Replace the stored recommendation.
    pub fn update_recommended_careers(&mut self, careers: Vec<String>) {
        self.recommended_careers = careers;
    }

    /// Mark the quiz as finished or not.
    pub const fn set_assessment_completed(&mut self, completed: bool) {
        self.assessment_completed = completed;
    }

    /// Record a finished quiz: merge interests, store the recommendation and
    /// mark the assessment complete.
    pub fn complete_assessment(&mut self, interests: &InterestScore, recommended: Vec<String>) {
        self.update_interests(interests);
        self.update_recommended_careers(recommended);
        self.set_assessment_completed(true);
    }

    /// Bookmark a career. Returns `false` when it was already saved.
    pub fn save_career(&mut self, career_id: &str) -> bool {
        insert_unique(&mut self.saved_careers, career_id)
    }

    /// Remove a career bookmark. Returns `false` when it was not saved.
    pub fn unsave_career(&mut self, career_id: &str) -> bool {
        remove_all(&mut self.saved_careers, career_id)
    }

    /// Whether a career is bookmarked.
    #[must_use]
    pub fn is_career_saved(&self, career_id: &str) -> bool {
        self.saved_careers.iter().any(|id| id == career_id)
    }

    /// Bookmark a course. Returns `false` when it was already saved.
    pub fn save_course(&mut self, course_id: &str) -> bool {
        insert_unique(&mut self.saved_courses, course_id)
    }

    /// Remove a course bookmark. Returns `false` when it was not saved.
    pub fn unsave_course(&mut self, course_id: &str) -> bool {
        remove_all(&mut self.saved_courses, course_id)
    }

    /// Merge self-rated skills; ratings for the same skill are replaced.
    pub fn update_skills_rating<I>(&mut self, ratings: I)
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        self.skills_rating.extend(ratings);
    }

    /// Set the entrance exam.
    pub fn set_exam_type(&mut self, exam_type: impl Into<String>) {
        self.exam_type = Some(exam_type.into());
    }

    /// Set the reported exam score.
    pub fn set_exam_score(&mut self, score: impl Into<String>) {
        self.exam_score = Some(score.into());
    }

    /// Replace stated preferences.
    pub fn set_preferences(&mut self, preferences: Vec<String>) {
        self.preferences = preferences;
    }

    /// Replace stated strengths.
    pub fn set_strengths(&mut self, strengths: Vec<String>) {
        self.strengths = strengths;
    }
}

fn insert_unique(list: &mut Vec<String>, id: &str) -> bool {
    if list.iter().any(|existing| existing == id) {
        return false;
    }
    list.push(id.to_owned());
    true
}

fn remove_all(list: &mut Vec<String>, id: &str) -> bool {
    let before = list.len();
    list.retain(|existing| existing != id);
    list.len() != before
}
