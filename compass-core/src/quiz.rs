//! Quiz questions and the tally that turns answers into interests.

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use crate::{Category, InterestScore};

/// One selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuizOption {
    /// Identifier, unique across the quiz.
    pub id: String,
    /// Text shown to the user.
    pub text: String,
    /// Category the option contributes to.
    pub category: Category,
    /// Weight added to the category when selected.
    pub value: u32,
}

impl QuizOption {
    /// Construct an option.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        category: Category,
        value: u32,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category,
            value,
        }
    }
}

/// A question with its ordered options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    /// Identifier, unique across the quiz.
    pub id: String,
    /// Question text.
    #[cfg_attr(feature = "serde", serde(rename = "question"))]
    pub prompt: String,
    /// Options in display order.
    pub options: Vec<QuizOption>,
}

impl Question {
    /// Construct a question.
    #[must_use]
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, options: Vec<QuizOption>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options,
        }
    }

    /// Find an option of this question by identifier.
    #[must_use]
    pub fn option(&self, id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.id == id)
    }
}

/// Errors raised while building a quiz or tallying answers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The quiz had no questions.
    #[error("quiz must contain at least one question")]
    Empty,
    /// A question offered no options.
    #[error("question '{question}' has no options")]
    NoOptions {
        /// Identifier of the question.
        question: String,
    },
    /// Two questions shared an identifier.
    #[error("question '{question}' appears more than once")]
    DuplicateQuestion {
        /// The repeated identifier.
        question: String,
    },
    /// Two options shared an identifier.
    #[error("option '{option}' appears more than once")]
    DuplicateOption {
        /// The repeated identifier.
        option: String,
    },
    /// An answer named a question that is not in the quiz.
    #[error("answer refers to unknown question '{question}'")]
    UnknownQuestion {
        /// The unknown identifier.
        question: String,
    },
    /// An answer selected an option that does not belong to its question.
    #[error("option '{option}' is not an answer to question '{question}'")]
    UnknownOption {
        /// The answered question.
        question: String,
        /// The rejected option.
        option: String,
    },
}

/// The selected option per question.
///
/// Selecting again for the same question replaces the earlier choice, so a
/// user stepping back through the quiz ends with one answer per question.
///
/// # Examples
/// ```
/// use compass_core::QuizAnswers;
///
/// let mut answers = QuizAnswers::new();
/// answers.select("1", "1a");
/// answers.select("1", "1b");
/// assert_eq!(answers.selected("1"), Some("1b"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct QuizAnswers {
    selections: BTreeMap<String, String>,
}

impl QuizAnswers {
    /// Construct an empty answer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the option chosen for a question.
    pub fn select(&mut self, question: impl Into<String>, option: impl Into<String>) {
        self.selections.insert(question.into(), option.into());
    }

    /// Record a selection while returning `self` for chaining.
    #[must_use]
    pub fn with_answer(mut self, question: impl Into<String>, option: impl Into<String>) -> Self {
        self.select(question, option);
        self
    }

    /// Return the option chosen for a question.
    #[must_use]
    pub fn selected(&self, question: &str) -> Option<&str> {
        self.selections.get(question).map(String::as_str)
    }

    /// Iterate `(question, option)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selections
            .iter()
            .map(|(question, option)| (question.as_str(), option.as_str()))
    }

    /// Number of answered questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Report whether nothing has been answered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// An ordered, validated set of questions.
///
/// # Examples
/// ```
/// use compass_core::{Category, Question, Quiz, QuizAnswers, QuizOption};
///
/// # fn main() -> Result<(), compass_core::QuizError> {
/// let quiz = Quiz::new(vec![Question::new(
///     "1",
///     "Pick one",
///     vec![
///         QuizOption::new("1a", "Puzzles", Category::Analytical, 5),
///         QuizOption::new("1b", "Drawing", Category::Creative, 5),
///     ],
/// )])?;
/// let interests = quiz.tally(&QuizAnswers::new().with_answer("1", "1a"))?;
/// assert_eq!(interests.weight(Category::Analytical), Some(5));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Question>", into = "Vec<Question>")
)]
pub struct Quiz {
    questions: Vec<Question>,
}

impl Quiz {
    /// Validate and construct a quiz.
    ///
    /// # Errors
    /// Returns [`QuizError`] when the quiz is empty, a question lacks
    /// options, or identifiers repeat.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        let mut question_ids = HashSet::new();
        let mut option_ids = HashSet::new();
        for question in &questions {
            if !question_ids.insert(question.id.as_str()) {
                return Err(QuizError::DuplicateQuestion {
                    question: question.id.clone(),
                });
            }
            if question.options.is_empty() {
                return Err(QuizError::NoOptions {
                    question: question.id.clone(),
                });
            }
            for option in &question.options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(QuizError::DuplicateOption {
                        option: option.id.clone(),
                    });
                }
            }
        }
        Ok(Self { questions })
    }

    /// Questions in order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Find a question by identifier.
    #[must_use]
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    /// Report whether every question has an answer.
    #[must_use]
    pub fn is_complete(&self, answers: &QuizAnswers) -> bool {
        self.questions
            .iter()
            .all(|question| answers.selected(&question.id).is_some())
    }

    /// Sum the values of the selected options per category.
    ///
    /// Unanswered questions contribute nothing.
    ///
    /// # Errors
    /// Returns [`QuizError::UnknownQuestion`] or [`QuizError::UnknownOption`]
    /// when an answer does not fit the quiz.
    pub fn tally(&self, answers: &QuizAnswers) -> Result<InterestScore, QuizError> {
        let mut interests = InterestScore::new();
        for (question_id, option_id) in answers.iter() {
            let question =
                self.question(question_id)
                    .ok_or_else(|| QuizError::UnknownQuestion {
                        question: question_id.to_owned(),
                    })?;
            let option = question
                .option(option_id)
                .ok_or_else(|| QuizError::UnknownOption {
                    question: question_id.to_owned(),
                    option: option_id.to_owned(),
                })?;
            interests.accumulate(option.category, option.value);
        }
        log::debug!(
            "tallied {} answers into {} interest categories",
            answers.len(),
            interests.len()
        );
        Ok(interests)
    }
}

impl TryFrom<Vec<Question>> for Quiz {
    type Error = QuizError;

    fn try_from(questions: Vec<Question>) -> Result<Self, Self::Error> {
        Self::new(questions)
    }
}

impl From<Quiz> for Vec<Question> {
    fn from(quiz: Quiz) -> Self {
        quiz.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn quiz() -> Quiz {
        Quiz::new(vec![
            Question::new(
                "1",
                "Which activity?",
                vec![
                    QuizOption::new("1a", "Puzzles", Category::Analytical, 5),
                    QuizOption::new("1b", "Art", Category::Creative, 5),
                ],
            ),
            Question::new(
                "2",
                "Which subject?",
                vec![
                    QuizOption::new("2a", "Maths", Category::Analytical, 3),
                    QuizOption::new("2b", "Computing", Category::Technical, 5),
                ],
            ),
        ])
        .expect("valid quiz")
    }

    #[rstest]
    fn tally_sums_values_per_category(quiz: Quiz) {
        let answers = QuizAnswers::new()
            .with_answer("1", "1a")
            .with_answer("2", "2a");
        let interests = quiz.tally(&answers).expect("tally");
        assert_eq!(interests.weight(Category::Analytical), Some(8));
        assert_eq!(interests.len(), 1);
    }

    #[rstest]
    fn unanswered_questions_are_skipped(quiz: Quiz) {
        let answers = QuizAnswers::new().with_answer("2", "2b");
        let interests = quiz.tally(&answers).expect("tally");
        assert_eq!(interests.weight(Category::Technical), Some(5));
        assert!(!quiz.is_complete(&answers));
    }

    #[rstest]
    fn empty_answers_yield_empty_interests(quiz: Quiz) {
        let interests = quiz.tally(&QuizAnswers::new()).expect("tally");
        assert!(interests.is_empty());
    }

    #[rstest]
    fn tally_rejects_unknown_question(quiz: Quiz) {
        let answers = QuizAnswers::new().with_answer("9", "1a");
        let err = quiz.tally(&answers).expect_err("unknown question");
        assert!(matches!(err, QuizError::UnknownQuestion { question } if question == "9"));
    }

    #[rstest]
    fn tally_rejects_option_from_other_question(quiz: Quiz) {
        let answers = QuizAnswers::new().with_answer("1", "2b");
        let err = quiz.tally(&answers).expect_err("foreign option");
        assert_eq!(
            err,
            QuizError::UnknownOption {
                question: "1".to_owned(),
                option: "2b".to_owned(),
            }
        );
    }

    #[rstest]
    fn complete_when_every_question_answered(quiz: Quiz) {
        let answers = QuizAnswers::new()
            .with_answer("1", "1b")
            .with_answer("2", "2b");
        assert!(quiz.is_complete(&answers));
    }

    #[rstest]
    #[case(Vec::new(), QuizError::Empty)]
    #[case(
        vec![Question::new("1", "?", Vec::new())],
        QuizError::NoOptions { question: "1".to_owned() }
    )]
    #[case(
        vec![
            Question::new("1", "?", vec![QuizOption::new("a", "A", Category::Ai, 1)]),
            Question::new("1", "?", vec![QuizOption::new("b", "B", Category::Ai, 1)]),
        ],
        QuizError::DuplicateQuestion { question: "1".to_owned() }
    )]
    #[case(
        vec![
            Question::new("1", "?", vec![QuizOption::new("a", "A", Category::Ai, 1)]),
            Question::new("2", "?", vec![QuizOption::new("a", "B", Category::Ai, 1)]),
        ],
        QuizError::DuplicateOption { option: "a".to_owned() }
    )]
    fn quiz_validation(#[case] questions: Vec<Question>, #[case] expected: QuizError) {
        assert_eq!(Quiz::new(questions), Err(expected));
    }
}
