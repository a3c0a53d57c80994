//! Resolve the catalog, quiz and rule sources shared by several commands.
//!
//! Each source falls back to the compiled-in data when no path is given.

use camino::Utf8Path;
use compass_core::{CareerCatalog, Quiz};
use compass_data::{builtin, load_career_catalog, load_quiz};
use compass_scorer::{AffinityTable, load_affinity_table};

use crate::{ARG_CATALOG, ARG_QUIZ, ARG_RULES, CliError};

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match compass_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub(crate) fn career_catalog(path: Option<&Utf8Path>) -> Result<CareerCatalog, CliError> {
    match path {
        Some(path) => {
            require_existing(path, ARG_CATALOG)?;
            Ok(load_career_catalog(path)?)
        }
        None => Ok(builtin::careers()?),
    }
}

pub(crate) fn affinity_table(path: Option<&Utf8Path>) -> Result<AffinityTable, CliError> {
    match path {
        Some(path) => {
            require_existing(path, ARG_RULES)?;
            Ok(load_affinity_table(path)?)
        }
        None => Ok(builtin::affinity_table()?),
    }
}

pub(crate) fn quiz(path: Option<&Utf8Path>) -> Result<Quiz, CliError> {
    match path {
        Some(path) => {
            require_existing(path, ARG_QUIZ)?;
            Ok(load_quiz(path)?)
        }
        None => builtin::quiz().map_err(CliError::BuiltinQuiz),
    }
}
