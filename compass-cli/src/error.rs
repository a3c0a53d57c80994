//! Error types emitted by the Compass CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use compass_core::{CatalogError, ProfileStoreError, QuizError};
use compass_data::DataError;
use compass_scorer::{AffinityTableError, AffinityValidationError, RuleError};
use thiserror::Error;

/// Errors emitted by the Compass CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag that named the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag that named the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag that named the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Loading a catalog, quiz or answer file failed.
    #[error(transparent)]
    LoadData(#[from] DataError),
    /// Loading an affinity rule file failed.
    #[error(transparent)]
    LoadRules(#[from] AffinityTableError),
    /// The shipped career catalog failed validation.
    #[error("built-in career catalog is invalid: {0}")]
    BuiltinCatalog(#[from] CatalogError),
    /// The shipped quiz failed validation.
    #[error("built-in quiz is invalid: {0}")]
    BuiltinQuiz(#[source] QuizError),
    /// The shipped affinity rules failed validation.
    #[error("built-in affinity rules are invalid: {0}")]
    BuiltinRules(#[from] RuleError),
    /// The answers do not fit the quiz.
    #[error("answers in {path:?} do not match the quiz: {source}")]
    InvalidAnswers {
        /// The answer file.
        path: Utf8PathBuf,
        /// Why the answers were rejected.
        #[source]
        source: QuizError,
    },
    /// The affinity rules do not fit the career catalog.
    #[error(transparent)]
    InvalidRules(#[from] AffinityValidationError),
    /// Loading or saving the user profile failed.
    #[error(transparent)]
    Profile(#[from] ProfileStoreError),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
