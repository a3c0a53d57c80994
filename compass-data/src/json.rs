//! JSON readers for catalogs, quizzes and saved answers.

use std::io::BufReader;

use camino::Utf8Path;
use compass_core::{CareerCatalog, Quiz, QuizAnswers};
use compass_fs::open_utf8_file;
use serde::de::DeserializeOwned;

use crate::DataError;

fn load_json<T: DeserializeOwned>(path: &Utf8Path, kind: &'static str) -> Result<T, DataError> {
    let file = open_utf8_file(path).map_err(|source| DataError::Open {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        DataError::Parse {
            kind,
            path: path.to_path_buf(),
            source,
        }
    })?;
    log::debug!("loaded {kind} from {path}");
    Ok(value)
}

/// Load a career catalog from a JSON array of career records.
///
/// Records use the camelCase field names of [`compass_core::Career`]; only
/// `id` and `title` are required.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be opened, is malformed, names
/// an unknown icon, or repeats a career identifier.
pub fn load_career_catalog(path: &Utf8Path) -> Result<CareerCatalog, DataError> {
    load_json(path, "career catalog")
}

/// Load a quiz from a JSON array of questions.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be opened, is malformed, uses
/// an unknown category, or fails quiz validation.
pub fn load_quiz(path: &Utf8Path) -> Result<Quiz, DataError> {
    load_json(path, "quiz")
}

/// Load answers from a JSON object mapping question ids to option ids.
///
/// # Errors
/// Returns [`DataError`] when the file cannot be opened or is malformed.
pub fn load_answers(path: &Utf8Path) -> Result<QuizAnswers, DataError> {
    load_json(path, "quiz answers")
}
