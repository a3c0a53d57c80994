//! The shipped eight-question interest quiz.

use compass_core::{Category, Question, Quiz, QuizError, QuizOption};

/// Weight every shipped option adds to its category.
pub const OPTION_VALUE: u32 = 5;

type OptionRecord = (&'static str, &'static str, Category);

const QUESTIONS: [(&str, &str, [OptionRecord; 4]); 8] = [
    (
        "1",
        "Which of these activities do you find most enjoyable?",
        [
            ("1a", "Solving complex puzzles or problems", Category::Analytical),
            ("1b", "Creating visual designs or artwork", Category::Creative),
            ("1c", "Helping others learn or understand concepts", Category::People),
            ("1d", "Building or fixing things", Category::Technical),
        ],
    ),
    (
        "2",
        "In a group project, which role do you naturally take?",
        [
            ("2a", "The organizer who plans and coordinates", Category::Leadership),
            ("2b", "The creative one who generates ideas", Category::Creative),
            ("2c", "The analyst who evaluates options", Category::Analytical),
            ("2d", "The supporter who helps team members", Category::People),
        ],
    ),
    (
        "3",
        "Which subject do you find most interesting?",
        [
            ("3a", "Mathematics or physics", Category::Analytical),
            ("3b", "Art or design", Category::Creative),
            ("3c", "Psychology or sociology", Category::People),
            ("3d", "Computer science or engineering", Category::Technical),
        ],
    ),
    (
        "4",
        "Which skill would you most like to develop?",
        [
            ("4a", "Coding or software development", Category::Technical),
            ("4b", "Communication and negotiation", Category::People),
            ("4c", "Data analysis and interpretation", Category::Analytical),
            ("4d", "Design and visual storytelling", Category::Creative),
        ],
    ),
    (
        "5",
        "What kind of work environment do you prefer?",
        [
            ("5a", "Fast-paced with changing priorities", Category::Adaptability),
            ("5b", "Structured with clear expectations", Category::Organization),
            ("5c", "Collaborative with team interactions", Category::People),
            ("5d", "Independent with focus time", Category::Autonomy),
        ],
    ),
    (
        "6",
        "How do you approach learning something new?",
        [
            ("6a", "Research thoroughly before starting", Category::Analytical),
            ("6b", "Jump in and learn by doing", Category::Practical),
            ("6c", "Find someone to teach or guide you", Category::People),
            ("6d", "Watch videos or demonstrations first", Category::Observational),
        ],
    ),
    (
        "7",
        "What achievement would make you most proud?",
        [
            ("7a", "Creating an innovative solution to a problem", Category::Innovation),
            ("7b", "Being recognized as an expert in your field", Category::Mastery),
            ("7c", "Making a positive impact on people's lives", Category::Impact),
            ("7d", "Building something tangible that lasts", Category::Creation),
        ],
    ),
    (
        "8",
        "Which technology interests you most?",
        [
            ("8a", "Artificial intelligence and machine learning", Category::Ai),
            ("8b", "Virtual or augmented reality", Category::Immersive),
            ("8c", "Clean energy and sustainability tech", Category::Environmental),
            ("8d", "Cybersecurity and privacy", Category::Security),
        ],
    ),
];

/// Build the shipped quiz.
///
/// # Errors
/// Returns [`QuizError`] if the compiled-in questions are inconsistent.
pub fn quiz() -> Result<Quiz, QuizError> {
    let questions = QUESTIONS
        .iter()
        .map(|(id, prompt, options)| {
            let options = options
                .iter()
                .map(|(option, text, category)| {
                    QuizOption::new(*option, *text, *category, OPTION_VALUE)
                })
                .collect();
            Question::new(*id, *prompt, options)
        })
        .collect();
    Quiz::new(questions)
}
